//! Toggle configuration types.

use webdom::Display;

/// Shared defaults for toggle wrappers.
///
/// Applies to every wrapper built with this config; per-instance props take
/// precedence where both exist.
#[derive(Debug, Clone)]
pub struct ToggleConfig {
    /// Prefix for generated input IDs.
    pub id_prefix: String,

    /// Test selector written to `data-cy` when the props don't supply one.
    pub test_selector: String,

    /// Display mode of the wrapping label.
    pub label_display: Display,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            id_prefix: "toggleWrapper".into(),
            test_selector: "toggleWrapper-input".into(),
            label_display: Display::Block,
        }
    }
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generated ID prefix.
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Set the default test selector.
    pub fn test_selector(mut self, selector: impl Into<String>) -> Self {
        self.test_selector = selector.into();
        self
    }

    /// Set the label display mode.
    pub fn label_display(mut self, display: Display) -> Self {
        self.label_display = display;
        self
    }
}
