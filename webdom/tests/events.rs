use std::sync::{Arc, Mutex};

use webdom::{
    collect_focusable, Component, Document, DomError, Element, Event, EventKind, FocusState,
    HandlerRegistry, Key, Modifiers,
};

/// Component rendering a fixed tree and recording every event it receives.
struct Recorder {
    tree: Element,
    events: Arc<Mutex<Vec<Event>>>,
}

impl Recorder {
    fn new(tree: Element) -> Self {
        Self {
            tree,
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl Component for Recorder {
    fn render(&self, registry: &HandlerRegistry) -> Element {
        for id in ["a", "b", "cb", "radio"] {
            for kind in [
                EventKind::Focus,
                EventKind::Blur,
                EventKind::Click,
                EventKind::Change,
                EventKind::Key,
            ] {
                let events = Arc::clone(&self.events);
                registry.register(
                    id,
                    kind,
                    Arc::new(move |e| events.lock().unwrap().push(e.clone())),
                );
            }
        }
        self.tree.clone()
    }
}

fn form() -> Element {
    Element::div()
        .id("root")
        .child(Element::input("text").id("a"))
        .child(Element::text("not focusable").id("t"))
        .child(Element::input("text").id("b"))
        .child(
            Element::label()
                .id("lbl")
                .attr("for", "cb")
                .child(Element::input("checkbox").id("cb")),
        )
        .child(Element::input("radio").id("radio").attr("checked", true))
        .child(Element::input("text").id("off").disabled(true))
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_collect_focusable_skips_disabled_and_plain_elements() {
    assert_eq!(collect_focusable(&form()), vec!["a", "b", "cb", "radio"]);
}

#[test]
fn test_any_element_can_opt_into_focus() {
    let root = Element::div()
        .child(Element::div().id("card").focusable(true))
        .child(Element::input("checkbox").id("cb").focusable(false));
    assert_eq!(collect_focusable(&root), vec!["card"]);
}

#[test]
fn test_focus_emits_blur_then_focus() {
    let mut focus = FocusState::new();
    assert_eq!(
        focus.focus("a"),
        vec![Event::Focus {
            target: "a".into()
        }]
    );
    assert_eq!(
        focus.focus("b"),
        vec![
            Event::Blur {
                target: "a".into(),
                related: Some("b".into())
            },
            Event::Focus {
                target: "b".into()
            },
        ]
    );
    assert!(focus.focus("b").is_empty());
}

#[test]
fn test_blur_clears_focus() {
    let mut focus = FocusState::new();
    assert_eq!(focus.blur(), None);
    focus.focus("a");
    assert_eq!(
        focus.blur(),
        Some(Event::Blur {
            target: "a".into(),
            related: None
        })
    );
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_focus_next_wraps() {
    let root = form();
    let mut focus = FocusState::new();
    focus.focus("radio");
    focus.focus_next(&root);
    assert_eq!(focus.focused(), Some("a"));
}

#[test]
fn test_focus_prev_wraps() {
    let root = form();
    let mut focus = FocusState::new();
    focus.focus_prev(&root);
    assert_eq!(focus.focused(), Some("radio"));
    focus.focus("a");
    focus.focus_prev(&root);
    assert_eq!(focus.focused(), Some("radio"));
}

// ============================================================================
// Document
// ============================================================================

#[test]
fn test_document_focus_marks_element() {
    let mut doc = Document::mount(Recorder::new(form()));
    doc.focus("b").unwrap();

    assert_eq!(doc.focused(), Some("b"));
    assert!(doc.find("b").unwrap().focused);
    assert!(!doc.find("a").unwrap().focused);
}

#[test]
fn test_document_focus_errors() {
    let mut doc = Document::mount(Recorder::new(form()));
    assert_eq!(
        doc.focus("missing"),
        Err(DomError::UnknownElement("missing".into()))
    );
    assert_eq!(doc.focus("t"), Err(DomError::NotFocusable("t".into())));
    assert_eq!(doc.focus("off"), Err(DomError::NotFocusable("off".into())));
}

#[test]
fn test_document_tab_dispatches_blur_and_focus() {
    let mut doc = Document::mount(Recorder::new(form()));
    doc.key(Key::Tab, Modifiers::new());
    doc.key(Key::Tab, Modifiers::new());

    assert_eq!(
        doc.component().events(),
        vec![
            Event::Focus {
                target: "a".into()
            },
            Event::Blur {
                target: "a".into(),
                related: Some("b".into())
            },
            Event::Focus {
                target: "b".into()
            },
        ]
    );
}

#[test]
fn test_document_shift_tab_moves_backwards() {
    let mut doc = Document::mount(Recorder::new(form()));
    doc.focus("b").unwrap();
    doc.key(Key::Tab, Modifiers::shift());
    assert_eq!(doc.focused(), Some("a"));
}

#[test]
fn test_label_click_is_forwarded_to_input() {
    let mut doc = Document::mount(Recorder::new(form()));
    doc.click("lbl").unwrap();

    assert_eq!(doc.focused(), Some("cb"));
    assert_eq!(
        doc.component().events(),
        vec![
            Event::Focus {
                target: "cb".into()
            },
            Event::Click {
                target: "cb".into()
            },
            Event::Change {
                target: "cb".into(),
                checked: true
            },
        ]
    );
}

#[test]
fn test_click_on_checked_radio_does_not_change() {
    let mut doc = Document::mount(Recorder::new(form()));
    doc.click("radio").unwrap();

    let events = doc.component().events();
    assert!(events.contains(&Event::Click {
        target: "radio".into()
    }));
    assert!(!events.iter().any(|e| e.kind() == EventKind::Change));
}

#[test]
fn test_space_activates_focused_checkbox() {
    let mut doc = Document::mount(Recorder::new(form()));
    doc.focus("cb").unwrap();
    doc.key(Key::Char(' '), Modifiers::new());

    let events = doc.component().events();
    assert!(events.contains(&Event::Change {
        target: "cb".into(),
        checked: true
    }));
}

#[test]
fn test_enter_activates_focused_checkbox() {
    let mut doc = Document::mount(Recorder::new(form()));
    doc.focus("cb").unwrap();
    doc.key(Key::Enter, Modifiers::new());

    let events = doc.component().events();
    assert!(events.contains(&Event::Change {
        target: "cb".into(),
        checked: true
    }));
    assert!(!events.iter().any(|e| e.kind() == EventKind::Key));
}

#[test]
fn test_enter_on_text_input_is_a_key_event() {
    let mut doc = Document::mount(Recorder::new(form()));
    doc.focus("a").unwrap();
    doc.key(Key::Enter, Modifiers::new());

    assert_eq!(
        doc.component().events().last(),
        Some(&Event::Key {
            target: Some("a".into()),
            key: Key::Enter,
            modifiers: Modifiers::new()
        })
    );
}

#[test]
fn test_escape_blurs_focused_element() {
    let mut doc = Document::mount(Recorder::new(form()));
    doc.focus("a").unwrap();
    doc.key(Key::Escape, Modifiers::new());

    assert_eq!(doc.focused(), None);
    assert!(!doc.find("a").unwrap().focused);
    assert_eq!(
        doc.component().events().last(),
        Some(&Event::Blur {
            target: "a".into(),
            related: None
        })
    );
}

#[test]
fn test_escape_without_focus_changes_nothing() {
    let mut doc = Document::mount(Recorder::new(form()));
    doc.key(Key::Escape, Modifiers::new());

    assert_eq!(doc.component().events(), Vec::new());
    assert_eq!(doc.focused(), None);
}

#[test]
fn test_removed_focused_element_is_blurred() {
    let mut doc = Document::mount(Recorder::new(form()));
    doc.focus("a").unwrap();
    doc.update(|r| r.tree = Element::div().child(Element::input("text").id("b")));

    assert_eq!(doc.focused(), None);
    assert!(!doc.find("b").unwrap().focused);
    assert_eq!(
        doc.component().events().last(),
        Some(&Event::Blur {
            target: "a".into(),
            related: None
        })
    );
}

#[test]
fn test_other_keys_target_focused_element() {
    let mut doc = Document::mount(Recorder::new(form()));
    doc.focus("a").unwrap();
    doc.key(Key::Char('x'), Modifiers::new());

    assert_eq!(
        doc.component().events().last(),
        Some(&Event::Key {
            target: Some("a".into()),
            key: Key::Char('x'),
            modifiers: Modifiers::new()
        })
    );
}

#[test]
fn test_click_on_disabled_element_is_ignored() {
    let mut doc = Document::mount(Recorder::new(form()));
    doc.click("off").unwrap();
    assert!(doc.component().events().is_empty());
    assert_eq!(doc.focused(), None);
}

#[test]
fn test_registry_dispatch_reports_misses() {
    let registry = HandlerRegistry::new();
    assert!(!registry.dispatch(&Event::Click {
        target: "nobody".into()
    }));
    assert!(registry.is_empty());
}
