use crate::core::motion::Point;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    PointerLeave,
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    PointerMove(Point),
    PointerLeave,
    /// Scroll progress through the observed section, `0.0..=1.0`.
    Scroll(f64),
}

impl ViewEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ViewEvent::PointerMove(_) => EventKind::PointerMove,
            ViewEvent::PointerLeave => EventKind::PointerLeave,
            ViewEvent::Scroll(_) => EventKind::Scroll,
        }
    }
}

type Handler = Arc<dyn Fn(&ViewEvent) + Send + Sync>;

#[derive(Default)]
struct Inner {
    next_id: u64,
    handlers: HashMap<u64, (EventKind, Handler)>,
}

/// Window-level listeners shared by the views mounted in one client.
///
/// Registration hands back a [`ListenerGuard`]; the listener stays installed
/// exactly as long as the guard lives.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<Inner>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&self, kind: EventKind, handler: F) -> ListenerGuard
    where
        F: Fn(&ViewEvent) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.insert(id, (kind, Arc::new(handler)));
        tracing::trace!("Registered {:?} listener #{}", kind, id);

        ListenerGuard {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Delivers `event` to every listener of its kind; returns how many ran.
    pub fn dispatch(&self, event: &ViewEvent) -> usize {
        // Handlers run outside the lock so they may register or drop listeners.
        let handlers: Vec<Handler> = {
            let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            let mut matching: Vec<(u64, Handler)> = inner
                .handlers
                .iter()
                .filter(|(_, (kind, _))| *kind == event.kind())
                .map(|(id, (_, handler))| (*id, Arc::clone(handler)))
                .collect();
            matching.sort_by_key(|(id, _)| *id);
            matching.into_iter().map(|(_, handler)| handler).collect()
        };

        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .handlers
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Deregisters its listener when dropped.
#[must_use = "the listener is removed as soon as the guard is dropped"]
pub struct ListenerGuard {
    id: u64,
    registry: Weak<Mutex<Inner>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(|e| e.into_inner());
            inner.handlers.remove(&self.id);
            tracing::trace!("Removed listener #{}", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_dispatch_only_reaches_matching_kind() {
        let registry = ListenerRegistry::new();
        let moves = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&moves);
        let _guard = registry.register(EventKind::PointerMove, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(
            registry.dispatch(&ViewEvent::PointerMove(Point { x: 1.0, y: 2.0 })),
            1
        );
        assert_eq!(registry.dispatch(&ViewEvent::Scroll(0.3)), 0);
        assert_eq!(moves.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropping_guard_deregisters() {
        let registry = ListenerRegistry::new();
        let guard = registry.register(EventKind::Scroll, |_| {});
        let other = registry.register(EventKind::PointerLeave, |_| {});
        assert_eq!(registry.len(), 2);

        drop(guard);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.dispatch(&ViewEvent::Scroll(0.5)), 0);

        drop(other);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_guard_outliving_registry_is_harmless() {
        let registry = ListenerRegistry::new();
        let guard = registry.register(EventKind::Scroll, |_| {});
        drop(registry);
        drop(guard);
    }
}
