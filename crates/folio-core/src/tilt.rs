use crate::constants::{TILT_HOVER_SCALE, TILT_MAX_DEG, TILT_PERSPECTIVE_PX};

/// Card rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// Client-space bounds of the hovered element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Tilt {
    /// Rotation for a pointer at (`client_x`, `client_y`) over `bounds`.
    ///
    /// Linear in the offset from the centre: the top edge tips toward the
    /// viewer (+X), the left edge away (-Y), both capped at the edges.
    pub fn at(bounds: &Bounds, client_x: f64, client_y: f64) -> Tilt {
        let cx = bounds.width / 2.0;
        let cy = bounds.height / 2.0;
        if cx <= 0.0 || cy <= 0.0 {
            return Tilt::default();
        }
        let x = client_x - bounds.left;
        let y = client_y - bounds.top;
        Tilt {
            rotate_x: ((y - cy) / cy) * -TILT_MAX_DEG,
            rotate_y: ((x - cx) / cx) * TILT_MAX_DEG,
        }
    }

    pub fn hover_transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
            TILT_PERSPECTIVE_PX,
            self.rotate_x,
            self.rotate_y,
            s = TILT_HOVER_SCALE
        )
    }
}

pub fn neutral_transform() -> String {
    format!(
        "perspective({}px) rotateX(0) rotateY(0) scale3d(1, 1, 1)",
        TILT_PERSPECTIVE_PX
    )
}
