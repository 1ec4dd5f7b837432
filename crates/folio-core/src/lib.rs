pub mod animation;
pub mod color;
pub mod constants;
pub mod events;
pub mod form;
pub mod gpu;
pub mod input;
pub mod page;
pub mod presets;
pub mod scene;
pub mod section;
pub mod state;
pub mod tilt;

pub use animation::*;
pub use color::*;
pub use constants::*;
pub use presets::*;
pub use scene::*;
pub use section::*;
pub use state::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

/// Damped approach: move `t` of the remaining distance from `current` to
/// `target`.
#[inline]
pub fn approach(current: f32, target: f32, t: f32) -> f32 {
    current + (target - current) * t
}
