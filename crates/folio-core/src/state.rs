//! Visual-side state types shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The web frontend
//! consumes them to build camera matrices and per-frame uniforms.

use crate::color::Rgb;
use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_START_Z};
use crate::presets::VisualPreset;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Perspective camera that sits on the Z axis and rotates in place.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    /// Euler XYZ angles in radians; Z is always zero.
    pub rotation: Vec2,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_START_Z),
            rotation: Vec2::ZERO,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        let orientation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0);
        Mat4::from_rotation_translation(orientation, self.position).inverse()
    }
}

/// Currently rendered values, blended toward the active preset every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub rotation_speed: f32,
    pub layer_tilt: f32,
    pub camera_distance: f32,
    pub base_color: Rgb,
    pub particle_color: Rgb,
}

impl AnimationState {
    /// Start fully settled on `preset`.
    pub fn settled_on(preset: &VisualPreset) -> Self {
        Self {
            rotation_speed: preset.rotation_speed,
            layer_tilt: preset.layer_tilt,
            camera_distance: preset.camera_distance,
            base_color: preset.base_color,
            particle_color: preset.particle_color,
        }
    }

    pub fn approach(&mut self, target: &VisualPreset, t: f32) {
        self.rotation_speed = crate::approach(self.rotation_speed, target.rotation_speed, t);
        self.layer_tilt = crate::approach(self.layer_tilt, target.layer_tilt, t);
        self.camera_distance = crate::approach(self.camera_distance, target.camera_distance, t);
        self.base_color = self.base_color.lerp(target.base_color, t);
        self.particle_color = self.particle_color.lerp(target.particle_color, t);
    }
}
