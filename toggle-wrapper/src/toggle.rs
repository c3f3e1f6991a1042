//! ToggleWrapper component - a labelled, visually hidden boolean input whose
//! visuals are drawn by a caller-supplied render callback.

use std::fmt;
use std::sync::Arc;

use webdom::{
    display, generate_id, visually_hidden, AttrValue, Component, Element, Event, EventKind,
    Handler, HandlerRegistry, Style,
};

use crate::config::ToggleConfig;
use crate::props::ToggleWrapperProps;
use crate::state::State;

/// State snapshot passed to the render callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderProps {
    pub is_active: Option<bool>,
    pub has_focus: bool,
}

/// Render callback drawing the toggle's visible part.
pub type RenderFn = Arc<dyn Fn(RenderProps) -> Element + Send + Sync>;

/// A controlled checkbox/radio wrapper.
///
/// Renders a `<label>` around a visually hidden native input followed by the
/// element returned from the render callback. The checked state comes from
/// the props on every render; the only state kept here is whether the input
/// has focus.
///
/// # Example
///
/// ```ignore
/// let toggle = ToggleWrapper::new(
///     ToggleWrapperProps::new("notifications").active(true),
///     |rp: RenderProps| {
///         let glyph = if rp.is_active == Some(true) { "[x]" } else { "[ ]" };
///         let el = Element::text(glyph);
///         if rp.has_focus { el.class("focus-ring") } else { el }
///     },
/// );
/// let mut doc = Document::mount(toggle);
/// ```
pub struct ToggleWrapper {
    props: ToggleWrapperProps,
    config: ToggleConfig,
    /// Generated when the props carry no ID; reused for the instance's lifetime.
    fallback_id: Option<String>,
    has_focus: State<bool>,
    children: RenderFn,
}

impl ToggleWrapper {
    /// Create a wrapper with the default config.
    pub fn new<F>(props: ToggleWrapperProps, children: F) -> Self
    where
        F: Fn(RenderProps) -> Element + Send + Sync + 'static,
    {
        Self::with_config(props, ToggleConfig::default(), children)
    }

    pub fn with_config<F>(props: ToggleWrapperProps, config: ToggleConfig, children: F) -> Self
    where
        F: Fn(RenderProps) -> Element + Send + Sync + 'static,
    {
        let fallback_id = match props.id {
            Some(_) => None,
            None => Some(generate_id(&config.id_prefix)),
        };
        Self {
            props,
            config,
            fallback_id,
            has_focus: State::new(false),
            children: Arc::new(children),
        }
    }

    /// Replace the props. A previously generated ID is kept.
    pub fn set_props(&mut self, props: ToggleWrapperProps) {
        if props.id.is_none() && self.fallback_id.is_none() {
            self.fallback_id = Some(generate_id(&self.config.id_prefix));
        }
        self.props = props;
    }

    pub fn props(&self) -> &ToggleWrapperProps {
        &self.props
    }

    /// ID shared by the input and the label's `for`.
    pub fn id(&self) -> &str {
        self.props
            .id
            .as_deref()
            .or(self.fallback_id.as_deref())
            .unwrap_or_default()
    }

    pub fn is_active(&self) -> Option<bool> {
        self.props.is_active
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus.get()
    }

    /// Whether focus changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.has_focus.is_dirty()
    }

    pub fn render_props(&self) -> RenderProps {
        RenderProps {
            is_active: self.props.is_active,
            has_focus: self.has_focus(),
        }
    }

    fn input(&self, id: &str) -> Element {
        let props = &self.props;
        let mut forwarded = props.forwarded_attributes();
        // Present means disabled, whatever the value, except an explicit `false`.
        let disabled = match forwarded.remove("disabled") {
            Some(AttrValue::Bool(disabled)) => disabled,
            Some(AttrValue::Str(_)) => true,
            None => false,
        };
        let style = match forwarded.remove("style") {
            Some(AttrValue::Str(css)) => Style::parse(&css),
            _ => Style::new(),
        };
        let test_selector = props
            .test_selector
            .as_deref()
            .unwrap_or(self.config.test_selector.as_str());

        let mut input = Element::input(props.input_type.as_str())
            .attrs(forwarded)
            .id(id)
            .style(visually_hidden())
            .style(style)
            .attr("type", props.input_type.as_str())
            .attr("value", props.value.as_str())
            .attr("data-cy", test_selector)
            .disabled(disabled);

        match props.is_active {
            Some(active) => {
                input = input
                    .attr("checked", active)
                    .attr("aria-checked", active.to_string());
            }
            None => {
                input.attributes.remove("aria-checked");
            }
        }
        input
    }

    fn register_handlers(&self, id: &str, registry: &HandlerRegistry) {
        registry.register(
            id,
            EventKind::Focus,
            track_focus(&self.has_focus, true, self.props.listener(EventKind::Focus)),
        );
        registry.register(
            id,
            EventKind::Blur,
            track_focus(&self.has_focus, false, self.props.listener(EventKind::Blur)),
        );

        for (kind, handler) in self.props.forwarded_listeners() {
            registry.register(id, kind, Arc::clone(handler));
        }
    }
}

/// Handler that records focus in `state`, then calls the caller's listener
/// with the original event.
fn track_focus(state: &State<bool>, focused: bool, caller: Option<&Handler>) -> Handler {
    let state = state.clone();
    let caller = caller.cloned();
    Arc::new(move |event: &Event| {
        if state.set(focused) {
            log::debug!(
                "[toggle] {:?} has_focus={}",
                event.target().unwrap_or_default(),
                focused
            );
        }
        if let Some(caller) = &caller {
            caller(event);
        }
    })
}

impl Component for ToggleWrapper {
    fn render(&self, registry: &HandlerRegistry) -> Element {
        let id = self.id().to_string();
        let render_props = self.render_props();
        log::trace!("[toggle] render '{}' {:?}", id, render_props);

        self.register_handlers(&id, registry);
        self.has_focus.clear_dirty();

        Element::label()
            .attr("for", id.as_str())
            .style(display(self.config.label_display))
            .child(self.input(&id))
            .child((self.children)(render_props))
    }
}

impl fmt::Debug for ToggleWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleWrapper")
            .field("id", &self.id())
            .field("props", &self.props)
            .field("has_focus", &self.has_focus())
            .finish()
    }
}
