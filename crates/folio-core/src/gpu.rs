//! GPU-facing data layouts matching `shaders/scene.wgsl`.

use crate::animation::AnimationContext;
use crate::color::Rgb;
use crate::constants::{FOG_COLOR, FOG_DENSITY, LAYER_OPACITY, PARTICLE_OPACITY, PARTICLE_SIZE};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub layer_color: [f32; 4],
    pub particle_color: [f32; 4],
    pub fog: [f32; 4],
    pub params: [f32; 4],
}

impl SceneUniforms {
    pub fn from_context(ctx: &AnimationContext) -> Self {
        let fog = Rgb::from_hex(FOG_COLOR);
        Self {
            view: ctx.camera.view_matrix().to_cols_array_2d(),
            proj: ctx.camera.projection_matrix().to_cols_array_2d(),
            layer_color: ctx.state.base_color.with_alpha(LAYER_OPACITY),
            particle_color: ctx.state.particle_color.with_alpha(PARTICLE_OPACITY),
            fog: fog.with_alpha(FOG_DENSITY),
            params: [PARTICLE_SIZE, 0.0, 0.0, 0.0],
        }
    }
}

/// Per-layer model matrix, one column per vertex attribute.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LayerInstance {
    pub model: [[f32; 4]; 4],
}

pub fn layer_instances(ctx: &AnimationContext) -> Vec<LayerInstance> {
    let mut out = Vec::with_capacity(ctx.layers.len());
    write_layer_instances(ctx, &mut out);
    out
}

/// Refill `out` with the current layer transforms, reusing its allocation.
pub fn write_layer_instances(ctx: &AnimationContext, out: &mut Vec<LayerInstance>) {
    out.clear();
    out.extend(ctx.layers.iter().map(|l| LayerInstance {
        model: l.model_matrix().to_cols_array_2d(),
    }));
}
