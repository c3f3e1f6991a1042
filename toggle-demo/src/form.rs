//! Settings form built from toggle wrappers.

use std::fmt;

use toggle_wrapper::prelude::*;
use webdom::{display, Display, HandlerRegistry, Key, Style};

/// One scripted interaction.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    Key(Key),
    Click(&'static str),
    Blur,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(Key::Char(' ')) => write!(f, "press space"),
            Self::Key(key) => write!(f, "press {key:?}"),
            Self::Click(id) => write!(f, "click {id}"),
            Self::Blur => write!(f, "blur"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Density {
    Comfortable,
    Compact,
}

impl Density {
    fn value(&self) -> &'static str {
        match self {
            Self::Comfortable => "comfortable",
            Self::Compact => "compact",
        }
    }
}

/// A checkbox glyph with a focus marker.
fn checkbox_glyph(label: &'static str) -> impl Fn(RenderProps) -> Element + Send + Sync {
    move |rp| {
        let mark = match rp.is_active {
            Some(true) => "[x]",
            _ => "[ ]",
        };
        let el = Element::text(format!("{mark} {label}"));
        if rp.has_focus {
            el.class("focused")
        } else {
            el
        }
    }
}

fn radio_glyph(label: &'static str) -> impl Fn(RenderProps) -> Element + Send + Sync {
    move |rp| {
        let mark = if rp.is_active == Some(true) { "(o)" } else { "( )" };
        let el = Element::text(format!("{mark} {label}"));
        if rp.has_focus {
            el.class("focused")
        } else {
            el
        }
    }
}

/// Application settings edited through controlled toggles.
pub struct SettingsForm {
    notifications: State<bool>,
    dark_mode: State<bool>,
    density: State<Density>,
    toggles: Vec<ToggleWrapper>,
}

impl SettingsForm {
    pub fn new() -> Self {
        let notifications = State::new(true);
        let dark_mode = State::new(false);
        let density = State::new(Density::Comfortable);

        let toggles = vec![
            ToggleWrapper::new(
                flag_props("notifications", &notifications),
                checkbox_glyph("Notifications"),
            ),
            ToggleWrapper::with_config(
                flag_props("dark-mode", &dark_mode),
                ToggleConfig::new()
                    .id_prefix("appearance")
                    .label_display(Display::InlineBlock),
                checkbox_glyph("Dark mode"),
            ),
            ToggleWrapper::new(
                density_props(Density::Comfortable, &density),
                radio_glyph("Comfortable"),
            ),
            ToggleWrapper::new(
                density_props(Density::Compact, &density),
                radio_glyph("Compact"),
            ),
        ];

        Self {
            notifications,
            dark_mode,
            density,
            toggles,
        }
    }

    /// Push the current settings into the toggles' props.
    pub fn sync(&mut self) {
        let props = [
            flag_props("notifications", &self.notifications),
            flag_props("dark-mode", &self.dark_mode),
            density_props(Density::Comfortable, &self.density),
            density_props(Density::Compact, &self.density),
        ];
        for (toggle, props) in self.toggles.iter_mut().zip(props) {
            toggle.set_props(props);
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "notifications={} dark_mode={} density={}",
            self.notifications.get(),
            self.dark_mode.get(),
            self.density.get().value()
        )
    }
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SettingsForm {
    fn render(&self, registry: &HandlerRegistry) -> Element {
        Element::div()
            .id("settings")
            .style(display(Display::Flex).merge(Style::new().set("flex-direction", "column")))
            .children(self.toggles.iter().map(|t| t.render(registry)))
    }
}

/// Props for a checkbox bound to a boolean setting.
fn flag_props(value: &'static str, setting: &State<bool>) -> ToggleWrapperProps {
    let slot = setting.clone();
    ToggleWrapperProps::new(value)
        .active(setting.get())
        .test_selector(format!("setting-{value}"))
        .on(EventKind::Change, move |e| {
            if let Event::Change { checked, .. } = e {
                log::info!("{} -> {}", value, checked);
                slot.set(*checked);
            }
        })
}

/// Props for one radio of the density group.
fn density_props(option: Density, setting: &State<Density>) -> ToggleWrapperProps {
    let slot = setting.clone();
    ToggleWrapperProps::new(option.value())
        .id(format!("density-{}", option.value()))
        .radio()
        .active(setting.get() == option)
        .attr("name", "density")
        .on(EventKind::Change, move |e| {
            if let Event::Change { checked: true, .. } = e {
                log::info!("density -> {}", option.value());
                slot.set(option);
            }
        })
}
