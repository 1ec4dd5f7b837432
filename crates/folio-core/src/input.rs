use crate::constants::{
    MOBILE_MAX_WIDTH, ORIENTATION_CLAMP_DEG, ORIENTATION_SCALE, POINTER_TO_ROTATION,
};
use glam::Vec2;

/// Pointer offset from the viewport centre, in CSS pixels.
///
/// Mouse and device-orientation input both write the same two fields.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    half_width: f32,
    half_height: f32,
}

impl PointerState {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        let mut s = Self::default();
        s.set_viewport(viewport_width, viewport_height);
        s
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.half_width = (width / 2.0) as f32;
        self.half_height = (height / 2.0) as f32;
    }

    #[inline]
    pub fn on_mouse_move(&mut self, client_x: f64, client_y: f64) {
        self.x = client_x as f32 - self.half_width;
        self.y = client_y as f32 - self.half_height;
    }

    /// Apply a device tilt reading. Ignored on wide viewports; returns whether
    /// the reading was used.
    pub fn on_orientation(
        &mut self,
        beta: Option<f64>,
        gamma: Option<f64>,
        viewport_width: f64,
    ) -> bool {
        match map_orientation(beta, gamma, viewport_width) {
            Some(offset) => {
                self.x = offset.x;
                self.y = offset.y;
                true
            }
            None => false,
        }
    }

    /// Rotation target the camera approaches: pointer offset scaled down.
    #[inline]
    pub fn rotation_target(&self) -> Vec2 {
        Vec2::new(self.x, self.y) * POINTER_TO_ROTATION
    }
}

/// Map front-back (`beta`) and left-right (`gamma`) tilt in degrees into the
/// pointer offset space. Only active below the mobile width threshold.
pub fn map_orientation(beta: Option<f64>, gamma: Option<f64>, viewport_width: f64) -> Option<Vec2> {
    if viewport_width >= MOBILE_MAX_WIDTH {
        return None;
    }
    let clamp = |deg: Option<f64>| {
        deg.unwrap_or(0.0)
            .clamp(-ORIENTATION_CLAMP_DEG, ORIENTATION_CLAMP_DEG) as f32
    };
    Some(Vec2::new(clamp(gamma), clamp(beta)) * ORIENTATION_SCALE)
}

/// Lifecycle of the motion-sensor permission on platforms that gate it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPermission {
    /// Sensor events flow without asking.
    NotRequired,
    /// Waiting for the first user gesture.
    AwaitingGesture,
    Requested,
    Granted,
    Denied,
}

impl MotionPermission {
    pub fn initial(permission_api_present: bool) -> Self {
        if permission_api_present {
            MotionPermission::AwaitingGesture
        } else {
            MotionPermission::NotRequired
        }
    }

    /// Called on a user gesture. Returns true exactly once, when the caller
    /// should issue the permission request.
    pub fn on_gesture(&mut self) -> bool {
        if *self == MotionPermission::AwaitingGesture {
            *self = MotionPermission::Requested;
            true
        } else {
            false
        }
    }

    /// Record the platform's answer (`"granted"` or anything else). A failed
    /// request counts as denied. Returns true when the listener should attach.
    pub fn resolve(&mut self, response: Option<&str>) -> bool {
        if *self != MotionPermission::Requested {
            return false;
        }
        if response == Some("granted") {
            *self = MotionPermission::Granted;
            true
        } else {
            *self = MotionPermission::Denied;
            false
        }
    }

    pub fn listens(&self) -> bool {
        matches!(
            self,
            MotionPermission::NotRequired | MotionPermission::Granted
        )
    }
}
