//! Overlay navigation state machine.
//!
//! The overlay is either closed or open. Its DOM presentation (class,
//! ARIA attribute pair, body scroll lock) is always derived from the single
//! `OverlayState` value, never toggled piecemeal.

/// Key that closes an open overlay.
pub const CLOSE_KEY: &str = "Escape";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// Something the user did that may affect the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayEvent<'a> {
    /// Click on the menu button.
    OpenButton,
    /// Click on the explicit close button.
    CloseButton,
    /// Click that reached the overlay element. `on_backdrop` is true when the
    /// overlay itself was the event target, false when it bubbled up from content.
    BackdropClick { on_backdrop: bool },
    /// Document-level key press.
    Key(&'a str),
    /// Click on a navigation link inside the overlay.
    NavLink,
}

/// Everything the DOM shows for a given `OverlayState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayPresentation {
    /// Whether `overlay--open` is present on the overlay.
    pub open_class: bool,
    /// `aria-hidden` on the overlay.
    pub aria_hidden: &'static str,
    /// `aria-expanded` on the menu button.
    pub aria_expanded: &'static str,
    /// Inline `overflow` on `<body>`; empty string clears it.
    pub body_overflow: &'static str,
}

impl OverlayState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// State to apply in response to `event`.
    ///
    /// `None` means the event is not an overlay trigger and nothing should be
    /// touched. `Some` may return the current state again; applying it is a no-op.
    pub fn next(self, event: OverlayEvent<'_>) -> Option<Self> {
        match event {
            OverlayEvent::OpenButton => Some(Self::Open),
            OverlayEvent::CloseButton | OverlayEvent::NavLink => Some(Self::Closed),
            OverlayEvent::BackdropClick { on_backdrop: true } => Some(Self::Closed),
            OverlayEvent::BackdropClick { on_backdrop: false } => None,
            OverlayEvent::Key(key) if key == CLOSE_KEY && self.is_open() => Some(Self::Closed),
            OverlayEvent::Key(_) => None,
        }
    }

    pub fn presentation(self) -> OverlayPresentation {
        match self {
            Self::Open => OverlayPresentation {
                open_class: true,
                aria_hidden: "false",
                aria_expanded: "true",
                body_overflow: "hidden",
            },
            Self::Closed => OverlayPresentation {
                open_class: false,
                aria_hidden: "true",
                aria_expanded: "false",
                body_overflow: "",
            },
        }
    }
}
