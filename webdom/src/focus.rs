use crate::element::{Content, Element};
use crate::event::Event;

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Move focus to an element by ID.
    /// Returns the blur/focus events the move produces, empty if focus didn't change.
    pub fn focus(&mut self, id: &str) -> Vec<Event> {
        if self.focused.as_deref() == Some(id) {
            return Vec::new();
        }

        let mut events = Vec::new();
        if let Some(old) = self.focused.take() {
            events.push(Event::Blur {
                target: old,
                related: Some(id.to_string()),
            });
        }
        self.focused = Some(id.to_string());
        events.push(Event::Focus {
            target: id.to_string(),
        });
        events
    }

    /// Clear focus.
    /// Returns the blur event if there was something focused.
    pub fn blur(&mut self) -> Option<Event> {
        self.focused.take().map(|target| Event::Blur {
            target,
            related: None,
        })
    }

    /// Focus the next focusable element (Tab navigation), wrapping around.
    pub fn focus_next(&mut self, root: &Element) -> Vec<Event> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return Vec::new();
        }

        let new_focus = match &self.focused {
            None => &focusable[0],
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => &focusable[(i + 1) % focusable.len()],
                None => &focusable[0],
            },
        };

        let new_focus = new_focus.clone();
        self.focus(&new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation), wrapping around.
    pub fn focus_prev(&mut self, root: &Element) -> Vec<Event> {
        let focusable = collect_focusable(root);
        let Some(last) = focusable.last() else {
            return Vec::new();
        };

        let new_focus = match &self.focused {
            None => last,
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => last,
                Some(i) => &focusable[i - 1],
            },
        };

        let new_focus = new_focus.clone();
        self.focus(&new_focus)
    }
}

/// Collect the IDs of focusable, enabled elements in document order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.focusable && !element.disabled {
        if let Some(id) = &element.id {
            result.push(id.clone());
        }
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_recursive(child, result);
        }
    }
}
