//=========================================================================
// Listener Registry
//=========================================================================
//
// In-process `EventSource`: tracks which listener channels are live.
//
// Architecture:
//   subscribe(kind) → ListenerId → HashMap<ListenerId, ListenerKind>
//
// Hosts consult `is_subscribed()` before forwarding an event; tests drive
// the controller through the same registry without a window.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::interface::{EventSource, ListenerId};
use crate::core::input::ListenerKind;

//=== ListenerRegistry ====================================================

/// Registry of live listeners keyed by id.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    listeners: HashMap<ListenerId, ListenerKind>,
    next_id: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl EventSource for ListenerRegistry {
    fn subscribe(&mut self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, kind);
        debug!("Listener {:?} subscribed to {:?}", id, kind);
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        match self.listeners.remove(&id) {
            Some(kind) => {
                debug!("Listener {:?} removed from {:?}", id, kind);
                true
            }
            None => {
                warn!("Listener {:?} was not registered", id);
                false
            }
        }
    }

    fn is_subscribed(&self, kind: ListenerKind) -> bool {
        self.listeners.values().any(|k| *k == kind)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_registers_kind() {
        let mut registry = ListenerRegistry::new();
        registry.subscribe(ListenerKind::KeyDown);

        assert!(registry.is_subscribed(ListenerKind::KeyDown));
        assert!(!registry.is_subscribed(ListenerKind::KeyUp));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn ids_are_unique() {
        let mut registry = ListenerRegistry::new();
        let a = registry.subscribe(ListenerKind::Click);
        let b = registry.subscribe(ListenerKind::Click);
        assert_ne!(a, b);
    }

    #[test]
    fn unsubscribe_removes_listener_once() {
        let mut registry = ListenerRegistry::new();
        let id = registry.subscribe(ListenerKind::KeyUp);

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn kind_stays_subscribed_while_any_listener_remains() {
        let mut registry = ListenerRegistry::new();
        let first = registry.subscribe(ListenerKind::KeyDown);
        registry.subscribe(ListenerKind::KeyDown);

        registry.unsubscribe(first);

        assert!(registry.is_subscribed(ListenerKind::KeyDown));
    }
}
