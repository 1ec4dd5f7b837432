//! Small pure helpers behind the page chrome: scroll bar, nav menu, fade-ins.

/// One inline style assignment: (property, value).
pub type StyleDecl = (&'static str, &'static str);

/// Applied to every fade-in target before it is observed.
pub const FADE_HIDDEN_STYLES: [StyleDecl; 3] = [
    ("opacity", "0"),
    ("transform", "translateY(50px) rotateX(10deg)"),
    (
        "transition",
        "opacity 0.8s ease-out, transform 0.8s cubic-bezier(0.175, 0.885, 0.32, 1.275)",
    ),
];

pub const FADE_SHOWN_STYLES: [StyleDecl; 2] = [
    ("opacity", "1"),
    ("transform", "translateY(0) rotateX(0)"),
];

pub const FADE_SELECTOR: &str = ".fade-in, .fade-in-auto, section";
pub const SECTION_SELECTOR: &str = "section";
pub const TILT_SELECTOR: &str = ".card, .project-card, .bio-panel, .timeline-item";
pub const NAV_LINK_SELECTOR: &str = "nav a";

pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const HIDDEN_CLASS: &str = "hidden";

/// Percentage of the document scrolled, 0 when the page cannot scroll.
pub fn scroll_progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// Styles to apply for an intersection report on a fade-in target. Leaving
/// the viewport never hides it again.
pub fn fade_styles(intersecting: bool) -> Option<&'static [StyleDecl]> {
    if intersecting {
        Some(&FADE_SHOWN_STYLES)
    } else {
        None
    }
}

#[inline]
pub fn percent_width(percent: f64) -> String {
    format!("{}%", percent)
}

/// Open/closed state shared by the menu toggle and the nav panel.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavMenu {
    pub open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
