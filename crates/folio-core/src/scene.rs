//! One-time construction of the layers, particle stream and line geometry.

use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;

/// Build-time scene parameters. `Default` reads the tuning constants.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub layer_count: usize,
    pub layer_gap: f32,
    pub layer_size: f32,
    pub layer_segments: u32,
    pub particle_count: usize,
    pub particle_spread: f32,
    pub particle_depth: f32,
    pub particle_speed_min: f32,
    pub particle_speed_span: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            layer_count: LAYER_COUNT,
            layer_gap: LAYER_GAP,
            layer_size: LAYER_SIZE,
            layer_segments: LAYER_SEGMENTS,
            particle_count: PARTICLE_COUNT,
            particle_spread: PARTICLE_SPREAD,
            particle_depth: PARTICLE_DEPTH,
            particle_speed_min: PARTICLE_SPEED_MIN,
            particle_speed_span: PARTICLE_SPEED_SPAN,
        }
    }
}

/// Transform of one wireframe plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    pub z: f32,
    pub rotation_x: f32,
    pub rotation_z: f32,
    pub scale: f32,
}

impl Layer {
    /// Model matrix T·R·S with the scale applied in the plane only.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::new(self.scale, self.scale, 1.0),
            Quat::from_euler(EulerRot::XYZ, self.rotation_x, 0.0, self.rotation_z),
            Vec3::new(0.0, 0.0, self.z),
        )
    }

    /// +1 for even layers, -1 for odd, so neighbours counter-rotate.
    #[inline]
    pub fn spin_sign(index: usize) -> f32 {
        if index % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }
}

/// Particle stream. `positions` is uploaded to the GPU as-is each frame.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub speeds: Vec<f32>,
    spread: f32,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let n = config.particle_count;
        let mut positions = Vec::with_capacity(n);
        let mut speeds = Vec::with_capacity(n);
        for _ in 0..n {
            let x = (rng.gen::<f32>() - 0.5) * config.particle_spread;
            let y = (rng.gen::<f32>() - 0.5) * config.particle_spread;
            let z = -rng.gen::<f32>() * config.particle_depth;
            positions.push(Vec3::new(x, y, z));
            speeds.push(rng.gen::<f32>() * config.particle_speed_span + config.particle_speed_min);
        }
        Self {
            positions,
            speeds,
            spread: config.particle_spread,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Move every particle forward; particles past the camera restart at
    /// the far boundary with fresh x/y.
    pub fn advance<R: Rng + ?Sized>(&mut self, flow_speed: f32, rng: &mut R) {
        for (p, speed) in self.positions.iter_mut().zip(&self.speeds) {
            p.z += speed + flow_speed;
            if p.z > FORWARD_THRESHOLD {
                p.z = PARTICLE_RESET_Z;
                p.x = (rng.gen::<f32>() - 0.5) * self.spread;
                p.y = (rng.gen::<f32>() - 0.5) * self.spread;
            }
        }
    }
}

/// Evenly spaced layers receding from the origin along -Z.
pub fn build_layers(config: &SceneConfig) -> Vec<Layer> {
    (0..config.layer_count)
        .map(|i| Layer {
            z: -(i as f32) * config.layer_gap,
            rotation_x: 0.0,
            rotation_z: LAYER_START_ROTATION_Z,
            scale: 1.0,
        })
        .collect()
}

/// Line-list vertices for the wireframe of a `size`×`size` plane split into
/// `segments`×`segments` cells, two triangles per cell, each edge once.
pub fn wireframe_plane(size: f32, segments: u32) -> Vec<[f32; 3]> {
    let n = segments.max(1);
    let step = size / n as f32;
    let half = size / 2.0;
    let vertex = |ix: u32, iy: u32| [ix as f32 * step - half, -(iy as f32 * step - half), 0.0];

    let edges = 2 * n * (n + 1) + n * n;
    let mut out = Vec::with_capacity(edges as usize * 2);
    for iy in 0..=n {
        for ix in 0..n {
            out.push(vertex(ix, iy));
            out.push(vertex(ix + 1, iy));
        }
    }
    for ix in 0..=n {
        for iy in 0..n {
            out.push(vertex(ix, iy));
            out.push(vertex(ix, iy + 1));
        }
    }
    // shared edge of the two triangles in each cell
    for iy in 0..n {
        for ix in 0..n {
            out.push(vertex(ix, iy + 1));
            out.push(vertex(ix + 1, iy));
        }
    }
    out
}
