/// Scene, animation and page-interaction tuning constants.
///
/// These constants express intended behavior (smoothing factors, wrap-around
/// depths, clamp limits) and keep magic numbers out of the frame code.
use std::f32::consts::FRAC_PI_4;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_Z: f32 = 10.0;

// Layers (wireframe feature maps)
pub const LAYER_COUNT: usize = 6;
pub const LAYER_GAP: f32 = 10.0; // spacing along -Z at startup
pub const LAYER_SIZE: f32 = 30.0;
pub const LAYER_SEGMENTS: u32 = 20;
pub const LAYER_START_ROTATION_Z: f32 = FRAC_PI_4; // diamond orientation
pub const LAYER_OPACITY: f32 = 0.15;
pub const LAYER_WRAP_OFFSET: f32 = 60.0; // subtracted from z once past the threshold
pub const BREATH_AMPLITUDE: f32 = 0.02;

// Particles (data stream)
pub const PARTICLE_COUNT: usize = 400;
pub const PARTICLE_SPREAD: f32 = 40.0; // x/y extent, centred on the axis
pub const PARTICLE_DEPTH: f32 = 60.0; // initial z in (-depth, 0]
pub const PARTICLE_RESET_Z: f32 = -60.0;
pub const PARTICLE_SPEED_MIN: f32 = 0.05;
pub const PARTICLE_SPEED_SPAN: f32 = 0.2;
pub const PARTICLE_SIZE: f32 = 0.15;
pub const PARTICLE_OPACITY: f32 = 0.8;

// Shared wrap-around plane: anything past this z has flown by the camera
pub const FORWARD_THRESHOLD: f32 = 10.0;

// Fog
pub const FOG_COLOR: u32 = 0x030303;
pub const FOG_DENSITY: f32 = 0.02;

// Flow speed and section warp
pub const BASE_SPEED: f32 = 0.1;
pub const WARP_IMPULSE: f32 = 2.0;
pub const WARP_DECAY: f32 = 0.95; // per frame
pub const WARP_EPSILON: f32 = 0.01;

// Per-frame smoothing factors
pub const STATE_LERP: f32 = 0.05;
pub const CAMERA_DAMPING: f32 = 0.03;
pub const POINTER_TO_ROTATION: f32 = 0.001;

// Device orientation (mobile)
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const ORIENTATION_CLAMP_DEG: f64 = 45.0;
pub const ORIENTATION_SCALE: f32 = 15.0;

// Intersection thresholds
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.2;
pub const FADE_VISIBILITY_THRESHOLD: f64 = 0.1;

// Tilt-on-hover
pub const TILT_MAX_DEG: f64 = 10.0;
pub const TILT_PERSPECTIVE_PX: u32 = 1000;
pub const TILT_HOVER_SCALE: f64 = 1.02;

// Page chrome timings
pub const LOADER_HIDE_DELAY_MS: i32 = 500;
pub const FORM_RESET_DELAY_MS: i32 = 3000;
