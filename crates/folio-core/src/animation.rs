//! Per-frame update of the neural-flow backdrop.
//!
//! [`AnimationContext`] owns everything the frame loop mutates: the blended
//! visual state, the active preset, the warp impulse, the camera and the
//! scene objects. Event handlers reach it through [`AnimationContext::enter_section`];
//! the frame loop calls [`AnimationContext::tick`] once per display refresh.

use crate::constants::*;
use crate::presets::{SectionTable, VisualPreset, DEFAULT_SECTION};
use crate::scene::{build_layers, Layer, ParticleField, SceneConfig};
use crate::section::{SectionChange, SectionTracker};
use crate::state::{AnimationState, Camera};
use glam::Vec2;
use rand::Rng;

/// Inputs sampled by the frame loop before each tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Seconds since the clock started.
    pub elapsed: f32,
    /// Pointer offset already scaled to radians.
    pub pointer_target: Vec2,
}

pub struct AnimationContext {
    presets: SectionTable,
    target: VisualPreset,
    pub state: AnimationState,
    pub warp: f32,
    pub camera: Camera,
    pub layers: Vec<Layer>,
    pub particles: ParticleField,
    sections: SectionTracker,
}

impl AnimationContext {
    pub fn new<R: Rng + ?Sized>(
        config: &SceneConfig,
        presets: SectionTable,
        aspect: f32,
        rng: &mut R,
    ) -> Self {
        let target = presets
            .lookup(DEFAULT_SECTION)
            .copied()
            .unwrap_or(VisualPreset {
                rotation_speed: 0.0,
                layer_tilt: 0.0,
                base_color: crate::Rgb::from_hex(0xffffff),
                particle_color: crate::Rgb::from_hex(0xffffff),
                camera_distance: CAMERA_START_Z,
            });
        Self {
            presets,
            target,
            state: AnimationState::settled_on(&target),
            warp: 0.0,
            camera: Camera::new(aspect),
            layers: build_layers(config),
            particles: ParticleField::new(config, rng),
            sections: SectionTracker::default(),
        }
    }

    #[inline]
    pub fn target(&self) -> &VisualPreset {
        &self.target
    }

    pub fn active_section(&self) -> &str {
        self.sections.active()
    }

    /// Switch the blend target to the preset for `section_id`. Unknown ids
    /// leave the target untouched. Returns whether a preset was found.
    pub fn select_section(&mut self, section_id: &str) -> bool {
        match self.presets.lookup(section_id) {
            Some(preset) => {
                self.target = *preset;
                self.trigger_warp();
                true
            }
            None => false,
        }
    }

    /// A section crossed the visibility threshold.
    pub fn enter_section(&mut self, section_id: &str) -> SectionChange {
        if !self.sections.enter(section_id) {
            return SectionChange::Unchanged;
        }
        if self.select_section(section_id) {
            log::debug!("[section] {} active, warp {:.1}", section_id, self.warp);
            SectionChange::Activated
        } else {
            log::debug!("[section] {} has no preset", section_id);
            SectionChange::Recorded
        }
    }

    /// Intersection report for a section element. Off-screen reports change
    /// nothing and return `None`; on-screen ones mark the section visible and
    /// go through [`AnimationContext::enter_section`].
    pub fn observe_section(&mut self, section_id: &str, intersecting: bool) -> Option<SectionChange> {
        if !intersecting {
            return None;
        }
        Some(self.enter_section(section_id))
    }

    /// Reset the warp impulse; a second trigger before it decays simply
    /// restarts it.
    pub fn trigger_warp(&mut self) {
        self.warp = WARP_IMPULSE;
    }

    /// Base speed plus whatever warp remains.
    #[inline]
    pub fn flow_speed(&self) -> f32 {
        BASE_SPEED + self.warp
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, input: &FrameInput, rng: &mut R) {
        self.state.approach(&self.target, STATE_LERP);
        self.camera.position.z =
            crate::approach(self.camera.position.z, self.state.camera_distance, STATE_LERP);

        self.warp *= WARP_DECAY;
        let speed = self.flow_speed();

        let rot = &mut self.camera.rotation;
        rot.y += CAMERA_DAMPING * (-input.pointer_target.x - rot.y);
        rot.x += CAMERA_DAMPING * (-input.pointer_target.y - rot.x);

        for (i, layer) in self.layers.iter_mut().enumerate() {
            layer.rotation_z += self.state.rotation_speed * Layer::spin_sign(i);
            layer.rotation_x =
                crate::approach(layer.rotation_x, self.state.layer_tilt, STATE_LERP);
            layer.scale = 1.0 + (input.elapsed + i as f32).sin() * BREATH_AMPLITUDE;
            layer.z += speed;
            if layer.z > FORWARD_THRESHOLD {
                layer.z -= LAYER_WRAP_OFFSET;
            }
        }

        self.particles.advance(speed, rng);
    }
}
