//! Linear-space RGB colour with hex parsing and interpolation.

/// RGB colour stored in linear space so interpolation and shading agree with
/// an sRGB swapchain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` sRGB literal.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Move `t` of the remaining distance toward `target`.
    #[inline]
    pub fn lerp(self, target: Rgb, t: f32) -> Rgb {
        Rgb::new(
            crate::approach(self.r, target.r, t),
            crate::approach(self.g, target.g, t),
            crate::approach(self.b, target.b, t),
        )
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> [f32; 4] {
        [self.r, self.g, self.b, a]
    }

    /// Largest per-channel distance to `other`.
    pub fn max_channel_distance(self, other: Rgb) -> f32 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.0773993808
    } else {
        (c * 0.9478672986 + 0.0521327014).powf(2.4)
    }
}
