//! Document host for a mounted component.
//!
//! Owns the rendered element tree, focus and the handler registry, and turns
//! user interactions into dispatched events:
//! 1. Focus moves produce a blur on the old element, then a focus on the new one
//! 2. Clicks on a label are forwarded to the element named by its `for` attribute
//! 3. Clicks on a checkbox/radio input are followed by a `Change` event
//! 4. Tab / Shift+Tab move focus, Space or Enter activates a focused toggle
//!    input, Escape blurs
//! 5. A focused element that disappears on re-render receives a blur
//!
//! The component is re-rendered after every dispatched event.

use crate::element::{find_element, mark_focused, AttrValue, Element, Tag};
use crate::error::DomError;
use crate::event::{Event, Key, Modifiers};
use crate::focus::FocusState;
use crate::handler::HandlerRegistry;
use crate::render::to_html;

/// Something that can be mounted into a [`Document`].
pub trait Component {
    /// Build the element tree, registering event handlers in `registry`.
    fn render(&self, registry: &HandlerRegistry) -> Element;
}

/// A mounted component with its rendered tree.
pub struct Document<C> {
    component: C,
    root: Element,
    focus: FocusState,
    registry: HandlerRegistry,
}

impl<C: Component> Document<C> {
    /// Mount a component and perform the initial render.
    pub fn mount(component: C) -> Self {
        let registry = HandlerRegistry::new();
        let root = component.render(&registry);
        Self {
            component,
            root,
            focus: FocusState::new(),
            registry,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    /// ID of the currently focused element.
    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    /// Serialize the current tree to markup.
    pub fn html(&self) -> String {
        to_html(&self.root)
    }

    /// Re-render the component, replacing all registered handlers.
    ///
    /// If the focused element is gone from the new tree, it is blurred through
    /// the handlers of the previous render and the component renders again.
    pub fn render(&mut self) {
        let previous = std::mem::take(&mut self.registry);
        self.root = self.component.render(&self.registry);

        let removed = self
            .focus
            .focused()
            .is_some_and(|id| find_element(&self.root, id).is_none());
        if removed {
            if let Some(event) = self.focus.blur() {
                log::debug!("[render] focused element was removed: {:?}", event);
                previous.dispatch(&event);
                self.registry.clear();
                self.root = self.component.render(&self.registry);
            }
        }
        mark_focused(&mut self.root, self.focus.focused());
        log::trace!("[render] {} handlers registered", self.registry.len());
    }

    /// Mutate the component (e.g. to pass new props) and re-render.
    pub fn update(&mut self, f: impl FnOnce(&mut C)) {
        f(&mut self.component);
        self.render();
    }

    /// Dispatch an event to its target's handler and re-render.
    /// Returns true if a handler ran.
    pub fn dispatch(&mut self, event: Event) -> bool {
        log::debug!("[dispatch] {:?}", event);
        let handled = self.registry.dispatch(&event);
        self.render();
        handled
    }

    /// Move focus to the element with the given ID.
    pub fn focus(&mut self, id: &str) -> Result<(), DomError> {
        let element =
            find_element(&self.root, id).ok_or_else(|| DomError::UnknownElement(id.into()))?;
        if !element.focusable || element.disabled {
            return Err(DomError::NotFocusable(id.into()));
        }

        let events = self.focus.focus(id);
        self.dispatch_all(events);
        Ok(())
    }

    /// Remove focus from the focused element, if any.
    pub fn blur(&mut self) {
        if let Some(event) = self.focus.blur() {
            self.dispatch(event);
        }
    }

    /// Click an element. Label clicks activate the labelled element.
    pub fn click(&mut self, id: &str) -> Result<(), DomError> {
        let element =
            find_element(&self.root, id).ok_or_else(|| DomError::UnknownElement(id.into()))?;

        let target = match (element.tag, element.get_attr("for")) {
            (Tag::Label, Some(AttrValue::Str(for_id))) => for_id.clone(),
            _ => id.to_string(),
        };

        let element = find_element(&self.root, &target)
            .ok_or_else(|| DomError::UnknownElement(target.clone()))?;
        if element.disabled {
            log::debug!("[click] ignoring disabled element '{}'", target);
            return Ok(());
        }

        let focusable = element.focusable;
        let change = toggle_change(element);

        if focusable {
            let events = self.focus.focus(&target);
            self.dispatch_all(events);
        }
        self.dispatch(Event::Click {
            target: target.clone(),
        });
        if let Some(checked) = change {
            self.dispatch(Event::Change { target, checked });
        }
        Ok(())
    }

    /// Press a key on the focused element.
    pub fn key(&mut self, key: Key, modifiers: Modifiers) {
        match key {
            Key::Tab if !modifiers.shift => {
                let events = self.focus.focus_next(&self.root);
                self.dispatch_all(events);
            }
            Key::Tab | Key::BackTab => {
                let events = self.focus.focus_prev(&self.root);
                self.dispatch_all(events);
            }
            // Escape blurs; only emits a key event if nothing is focused
            Key::Escape if self.focus.focused().is_some() => self.blur(),
            Key::Char(' ') | Key::Enter if modifiers.none() => {
                let target = self
                    .focus
                    .focused()
                    .filter(|id| {
                        find_element(&self.root, id).is_some_and(Element::is_toggle_input)
                    })
                    .map(str::to_string);
                match target {
                    Some(id) => {
                        if let Err(e) = self.click(&id) {
                            log::warn!("[key] activating '{}' failed: {}", id, e);
                        }
                    }
                    None => self.dispatch_key(key, modifiers),
                }
            }
            _ => self.dispatch_key(key, modifiers),
        }
    }

    fn dispatch_key(&mut self, key: Key, modifiers: Modifiers) {
        let target = self.focus.focused().map(str::to_string);
        self.dispatch(Event::Key {
            target,
            key,
            modifiers,
        });
    }

    fn dispatch_all(&mut self, events: Vec<Event>) {
        for event in events {
            self.dispatch(event);
        }
    }
}

/// Checked state a click on a boolean input requests, if any.
/// Radios only ever request `true`; clicking a checked radio changes nothing.
fn toggle_change(element: &Element) -> Option<bool> {
    if !element.is_toggle_input() {
        return None;
    }
    let checked = element.is_checked();
    match element.get_attr("type").and_then(AttrValue::as_str) {
        Some("radio") if checked => None,
        Some("radio") => Some(true),
        _ => Some(!checked),
    }
}
