//! Caller-facing configuration of a single toggle.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use webdom::{AttrValue, Attributes, Event, EventKind, Handler, Listeners};

use crate::error::ParseInputTypeError;

/// Attributes the wrapper owns on the native input and never forwards.
const STRIPPED_ATTRIBUTES: &[&str] = &["id", "checked", "class", "className"];

/// Listeners the wrapper wraps instead of forwarding as-is.
const WRAPPED_LISTENERS: &[EventKind] = &[EventKind::Focus, EventKind::Blur];

/// Type of the native boolean input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputType {
    #[default]
    Checkbox,
    Radio,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = ParseInputTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checkbox" => Ok(Self::Checkbox),
            "radio" => Ok(Self::Radio),
            other => Err(ParseInputTypeError {
                value: other.to_string(),
            }),
        }
    }
}

/// Props of a [`ToggleWrapper`](crate::ToggleWrapper).
///
/// `value` is required, everything else has a default. Arbitrary input
/// attributes and listeners pass through to the native input, except the
/// ones the wrapper owns (`id`, `checked`, `class`/`className`, focus and
/// blur).
///
/// # Example
///
/// ```ignore
/// let props = ToggleWrapperProps::new("dark-mode")
///     .active(settings.dark_mode)
///     .attr("name", "appearance")
///     .on(EventKind::Change, move |e| { /* flip settings.dark_mode */ });
/// ```
#[derive(Clone, Default)]
pub struct ToggleWrapperProps {
    /// Whether the toggle is in the "on" state. `None` leaves `checked` unset.
    pub is_active: Option<bool>,
    /// Value submitted when active.
    pub value: String,
    /// Input ID. A generated one is used when absent.
    pub id: Option<String>,
    pub input_type: InputType,
    /// Test selector written to `data-cy`.
    pub test_selector: Option<String>,
    /// Pass-through input attributes.
    pub attributes: Attributes,
    /// Pass-through input listeners.
    pub listeners: Listeners,
}

impl ToggleWrapperProps {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }

    pub fn is_active(mut self, active: Option<bool>) -> Self {
        self.is_active = active;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Render a radio input instead of a checkbox.
    pub fn radio(mut self) -> Self {
        self.input_type = InputType::Radio;
        self
    }

    pub fn test_selector(mut self, selector: impl Into<String>) -> Self {
        self.test_selector = Some(selector.into());
        self
    }

    /// Add a pass-through input attribute.
    ///
    /// An `id` attribute sets [`id`](Self::id) instead, so the label keeps
    /// pointing at the input.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let name = name.into();
        let value = value.into();
        if name != "id" {
            self.attributes.set(name, value);
        } else if let AttrValue::Str(id) = value {
            self.id = Some(id);
        }
        self
    }

    /// Add a pass-through listener, replacing any earlier one for the same kind.
    pub fn on<F>(mut self, kind: EventKind, f: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.listeners.insert(kind, Arc::new(f));
        self
    }

    /// Called with the original event after the wrapper records focus.
    pub fn on_focus<F>(self, f: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on(EventKind::Focus, f)
    }

    /// Called with the original event after the wrapper records blur.
    pub fn on_blur<F>(self, f: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on(EventKind::Blur, f)
    }

    pub fn listener(&self, kind: EventKind) -> Option<&Handler> {
        self.listeners.get(&kind)
    }

    /// Attributes to spread onto the native input.
    pub fn forwarded_attributes(&self) -> Attributes {
        self.attributes.without(STRIPPED_ATTRIBUTES)
    }

    /// Listeners to register on the native input unchanged.
    pub fn forwarded_listeners(&self) -> impl Iterator<Item = (EventKind, &Handler)> {
        self.listeners
            .iter()
            .filter(|(kind, _)| !WRAPPED_LISTENERS.contains(*kind))
            .map(|(kind, handler)| (*kind, handler))
    }
}

impl fmt::Debug for ToggleWrapperProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut listeners: Vec<_> = self.listeners.keys().collect();
        listeners.sort();
        f.debug_struct("ToggleWrapperProps")
            .field("is_active", &self.is_active)
            .field("value", &self.value)
            .field("id", &self.id)
            .field("input_type", &self.input_type)
            .field("test_selector", &self.test_selector)
            .field("attributes", &self.attributes)
            .field("listeners", &listeners)
            .finish()
    }
}
