pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod handler;
pub mod host;
pub mod render;
pub mod style;

pub use element::{generate_id, AttrValue, Attributes, Content, Element, Tag};
pub use error::DomError;
pub use event::{Event, EventKind, Key, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use handler::{Handler, HandlerRegistry, Listeners};
pub use host::{Component, Document};
pub use render::to_html;
pub use style::{display, visually_hidden, Display, Style};
