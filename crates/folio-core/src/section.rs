/// What happened when a section crossed the visibility threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionChange {
    /// Same section as before, or an element without an id.
    Unchanged,
    /// New active section, but no preset is registered for it.
    Recorded,
    /// New active section with a preset; target switched and warp fired.
    Activated,
}

/// Remembers which page section was last seen becoming dominant.
#[derive(Default, Clone, Debug)]
pub struct SectionTracker {
    active: String,
}

impl SectionTracker {
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Record `id` if it differs from the current section. Returns true when
    /// the active section changed.
    pub fn enter(&mut self, id: &str) -> bool {
        if id.is_empty() || id == self.active {
            return false;
        }
        self.active.clear();
        self.active.push_str(id);
        true
    }
}
