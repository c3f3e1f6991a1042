use std::sync::atomic::{AtomicU64, Ordering};

use super::{AttrValue, Attributes, Content};
use crate::style::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Generate a process-wide unique element ID with the given prefix.
pub fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Markup tag of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Span,
    Label,
    Input,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
            Self::Label => "label",
            Self::Input => "input",
        }
    }

    /// Void elements have no content and no closing tag.
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Input)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub tag: Tag,
    pub id: Option<String>,

    // Content
    pub content: Content,

    // Markup
    pub attributes: Attributes,
    pub classes: Vec<String>,
    pub style: Style,

    // Interaction
    pub focusable: bool,

    // State (focused is set by the document after each render, disabled is set by user/components)
    /// Whether this element is currently focused. Set by the document, not by user.
    pub focused: bool,
    /// Whether this element is disabled. Disabled elements don't receive input.
    pub disabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: Tag::Div,
            id: None,
            content: Content::None,
            attributes: Attributes::new(),
            classes: Vec::new(),
            style: Style::default(),
            focusable: false,
            focused: false,
            disabled: false,
        }
    }
}

impl Element {
    pub fn div() -> Self {
        Self::default()
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: Tag::Span,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn label() -> Self {
        Self {
            tag: Tag::Label,
            ..Default::default()
        }
    }

    /// Create a native input element of the given `type`.
    pub fn input(input_type: &str) -> Self {
        let mut attributes = Attributes::new();
        attributes.set("type", input_type);
        Self {
            tag: Tag::Input,
            attributes,
            focusable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Markup
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn attrs(mut self, attributes: Attributes) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = self.style.merge(style);
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    // State
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether this input is a native boolean input (checkbox or radio).
    pub fn is_toggle_input(&self) -> bool {
        self.tag == Tag::Input
            && matches!(
                self.attributes.get("type").and_then(AttrValue::as_str),
                Some("checkbox" | "radio")
            )
    }

    /// Current `checked` attribute of a boolean input. Absent means unchecked.
    pub fn is_checked(&self) -> bool {
        self.attributes
            .get("checked")
            .and_then(AttrValue::as_bool)
            .unwrap_or(false)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }
}
