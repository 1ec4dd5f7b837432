use crate::render;
use folio_core::gpu::layer_instances;
use folio_core::{AnimationContext, FrameInput};
use folio_core::input::PointerState;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub anim: Rc<RefCell<AnimationContext>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub rng: StdRng,
    pub clock: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let input = FrameInput {
            elapsed: self.clock.elapsed().as_secs_f32(),
            pointer_target: self.pointer.borrow().rotation_target(),
        };
        let mut anim = self.anim.borrow_mut();
        anim.tick(&input, &mut self.rng);

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        match self.gpu.render(&anim) {
            Ok(()) => {}
            // Surface was reconfigured under us; the next frame recovers
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {}
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    anim: &Rc<RefCell<AnimationContext>>,
) -> Option<render::GpuState<'static>> {
    let (instances, positions) = {
        let a = anim.borrow();
        (layer_instances(&a), a.particles.positions.clone())
    };
    // the surface borrows the canvas for the life of the page
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, instances, positions).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("WebGPU unavailable, backdrop disabled: {:?}", e);
            None
        }
    }
}

/// Drive `frame_ctx` from requestAnimationFrame for the life of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
