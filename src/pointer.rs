//! Document-scope pointer listeners so components can watch clicks anywhere on the page.
//!
//! A listener exists exactly as long as its [`PointerSubscription`] guard.
//! Dropping the guard unregisters it, so holders never pair add/remove calls
//! by hand. Each registration names the [`PointerTarget`] that handles it,
//! so the page dispatches from the hub without knowing who subscribed.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Component that receives a document-level pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    /// Outside-click dismissal of the settings panel.
    SettingsPanel,
}

/// One live registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerListener {
    pub id: ListenerId,
    pub target: PointerTarget,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<PointerListener>,
}

/// Page-wide registry of pointer-down listeners.
///
/// Cloning yields another handle onto the same registry.
#[derive(Debug, Clone, Default)]
pub struct PointerHub {
    registry: Rc<RefCell<Registry>>,
}

impl PointerHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `target`; it stays registered until the guard is dropped.
    #[must_use = "dropping the subscription unregisters the listener immediately"]
    pub fn subscribe(&self, target: PointerTarget) -> PointerSubscription {
        let mut registry = self.registry.borrow_mut();
        registry.next_id = registry.next_id.wrapping_add(1);
        let id = ListenerId(registry.next_id);
        registry.listeners.push(PointerListener { id, target });
        tracing::debug!(
            listener = id.0,
            ?target,
            total = registry.listeners.len(),
            "pointer listener added"
        );
        PointerSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Listeners to notify for one pointer-down, in registration order.
    #[must_use]
    pub fn listeners(&self) -> Vec<PointerListener> {
        self.registry.borrow().listeners.clone()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    #[must_use]
    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.registry
            .borrow()
            .listeners
            .iter()
            .any(|listener| listener.id == id)
    }
}

/// RAII registration handle returned by [`PointerHub::subscribe`].
#[derive(Debug)]
pub struct PointerSubscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl PointerSubscription {
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.borrow_mut();
        registry.listeners.retain(|listener| listener.id != self.id);
        tracing::debug!(
            listener = self.id.0,
            total = registry.listeners.len(),
            "pointer listener removed"
        );
    }
}
