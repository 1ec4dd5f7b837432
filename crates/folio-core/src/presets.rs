//! Section id → visual preset lookup.

use crate::color::Rgb;
use fnv::FnvHashMap;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

pub const DEFAULT_SECTION: &str = "home";

/// Target parameters the backdrop blends toward while a section is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualPreset {
    pub rotation_speed: f32,
    /// Radians around X applied to every layer.
    pub layer_tilt: f32,
    pub base_color: Rgb,
    pub particle_color: Rgb,
    pub camera_distance: f32,
}

impl VisualPreset {
    fn new(
        rotation_speed: f32,
        layer_tilt: f32,
        base_hex: u32,
        particle_hex: u32,
        camera_distance: f32,
    ) -> Self {
        Self {
            rotation_speed,
            layer_tilt,
            base_color: Rgb::from_hex(base_hex),
            particle_color: Rgb::from_hex(particle_hex),
            camera_distance,
        }
    }
}

/// Immutable table of presets keyed by section element id.
pub struct SectionTable {
    presets: FnvHashMap<&'static str, VisualPreset>,
}

impl SectionTable {
    pub fn new(entries: impl IntoIterator<Item = (&'static str, VisualPreset)>) -> Self {
        Self {
            presets: entries.into_iter().collect(),
        }
    }

    /// The five page sections of the portfolio.
    pub fn portfolio() -> Self {
        Self::new([
            ("home", VisualPreset::new(0.002, 0.0, 0x306998, 0x00f3ff, 10.0)),
            // tilted layers, pulled back
            ("about", VisualPreset::new(0.005, 0.5, 0xff00cc, 0x00f3ff, 15.0)),
            // vertical walls, zoomed in
            ("skills", VisualPreset::new(0.01, FRAC_PI_2, 0x00ff00, 0xffffff, 5.0)),
            ("projects", VisualPreset::new(-0.005, FRAC_PI_4, 0xffd700, 0xff4500, 12.0)),
            ("contact", VisualPreset::new(0.0, 0.0, 0xffffff, 0x00f3ff, 20.0)),
        ])
    }

    #[inline]
    pub fn lookup(&self, section_id: &str) -> Option<&VisualPreset> {
        self.presets.get(section_id)
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.presets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for SectionTable {
    fn default() -> Self {
        Self::portfolio()
    }
}
