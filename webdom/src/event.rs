/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus. `related` is the element receiving focus, if any.
    Blur {
        target: String,
        related: Option<String>,
    },
    /// Element was activated by pointer or keyboard
    Click { target: String },
    /// Boolean input requested a new checked state
    Change { target: String, checked: bool },
    /// Key press event, targeted at focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Focus { .. } => EventKind::Focus,
            Self::Blur { .. } => EventKind::Blur,
            Self::Click { .. } => EventKind::Click,
            Self::Change { .. } => EventKind::Change,
            Self::Key { .. } => EventKind::Key,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Focus { target }
            | Self::Blur { target, .. }
            | Self::Click { target }
            | Self::Change { target, .. } => Some(target),
            Self::Key { target, .. } => target.as_deref(),
        }
    }
}

/// Event type used to key handler registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Focus,
    Blur,
    Click,
    Change,
    Key,
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Escape,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}
