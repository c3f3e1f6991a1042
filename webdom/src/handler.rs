//! Event handler storage.
//!
//! - `Handler`: closure type invoked with the dispatched event
//! - `Listeners`: handlers a caller hands to a component, keyed by event kind
//! - `HandlerRegistry`: handlers registered during render, keyed by (element_id, event kind)

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::event::{Event, EventKind};

/// A handler closure that receives the original event.
pub type Handler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Map of event kinds to handlers, used for passing callbacks to components.
pub type Listeners = HashMap<EventKind, Handler>;

/// Registry for element event handlers.
///
/// Maps (element_id, event kind) to handler closures. Cleared at the start
/// of each render so handlers from previous renders don't persist.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, EventKind), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event, replacing any earlier one.
    pub fn register(&self, element_id: &str, kind: EventKind, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), kind), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, kind: EventKind) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), kind))
            .cloned()
    }

    /// Invoke the handler registered for the event's target, if any.
    /// Returns true if a handler ran.
    pub fn dispatch(&self, event: &Event) -> bool {
        let Some(target) = event.target() else {
            return false;
        };
        match self.get(target, event.kind()) {
            Some(handler) => {
                handler(event);
                true
            }
            None => {
                log::trace!("[dispatch] no {:?} handler for '{}'", event.kind(), target);
                false
            }
        }
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.read().map(|h| h.is_empty()).unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("len", &self.len())
            .finish()
    }
}
