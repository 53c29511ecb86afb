//! Reveal-on-scroll state.

/// Per-element reveal state. Only ever moves from `Hidden` to `Revealed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// State after an intersection observation.
    pub fn observe(self, is_intersecting: bool) -> Self {
        if is_intersecting { Self::Revealed } else { self }
    }

    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }
}
