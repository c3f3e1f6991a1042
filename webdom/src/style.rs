//! Inline style declarations and the shared style utilities.

/// Ordered list of CSS declarations rendered into an element's `style` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration, replacing an earlier value for the same property.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Parse an inline `style` attribute value (`"color: red; margin: 0"`).
    /// Declarations without a `:` are skipped.
    pub fn parse(css: &str) -> Self {
        css.split(';')
            .filter_map(|decl| decl.split_once(':'))
            .map(|(property, value)| (property.trim(), value.trim()))
            .filter(|(property, value)| !property.is_empty() && !value.is_empty())
            .fold(Self::new(), |style, (property, value)| {
                style.set(property, value)
            })
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Apply `other` on top of this style.
    pub fn merge(self, other: Style) -> Self {
        other
            .declarations
            .into_iter()
            .fold(self, |style, (property, value)| style.set(property, value))
    }

    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// CSS `display` mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Block,
    Inline,
    InlineBlock,
    Flex,
    InlineFlex,
    None,
}

impl Display {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Inline => "inline",
            Self::InlineBlock => "inline-block",
            Self::Flex => "flex",
            Self::InlineFlex => "inline-flex",
            Self::None => "none",
        }
    }
}

/// Hide an element visually while keeping it in the accessibility tree.
pub fn visually_hidden() -> Style {
    Style::new()
        .set("border", "0")
        .set("clip", "rect(0 0 0 0)")
        .set("height", "1px")
        .set("margin", "-1px")
        .set("overflow", "hidden")
        .set("padding", "0")
        .set("position", "absolute")
        .set("white-space", "nowrap")
        .set("width", "1px")
}

pub fn display(mode: Display) -> Style {
    Style::new().set("display", mode.as_str())
}
