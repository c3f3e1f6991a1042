//! Accessible checkbox/radio wrapper that hands its visual state to a render callback.

pub mod config;
pub mod error;
pub mod props;
pub mod state;
pub mod toggle;

pub use config::ToggleConfig;
pub use error::ParseInputTypeError;
pub use props::{InputType, ToggleWrapperProps};
pub use state::State;
pub use toggle::{RenderProps, ToggleWrapper};

pub mod prelude {
    pub use crate::config::ToggleConfig;
    pub use crate::props::{InputType, ToggleWrapperProps};
    pub use crate::state::State;
    pub use crate::toggle::{RenderProps, ToggleWrapper};

    pub use webdom::{Component, Document, Element, Event, EventKind};
}
