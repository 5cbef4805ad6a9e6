use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

/// Process-wide notification queue drained by the toast layer.
pub static NOTIFIER: Lazy<Arc<Notifier>> = Lazy::new(|| Arc::new(Notifier::new()));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient user-facing message produced by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

type Listener = Box<dyn Fn() + Send + Sync>;

/// Queue of pending toasts. The gateway pushes according to the per-call
/// message flags; the UI registers a listener and drains in display order.
#[derive(Default)]
pub struct Notifier {
    queue: Mutex<VecDeque<Notification>>,
    listener: Mutex<Option<Listener>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    fn push(&self, kind: NotificationKind, message: String) {
        if message.is_empty() {
            return;
        }
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Notification { kind, message });
        if let Some(listener) = &*self.listener.lock().unwrap_or_else(|e| e.into_inner()) {
            listener();
        }
    }

    /// Register the single drain-side listener, replacing any previous one.
    pub fn set_listener(&self, listener: impl Fn() + Send + Sync + 'static) {
        *self.listener.lock().unwrap_or_else(|e| e.into_inner()) = Some(Box::new(listener));
    }

    /// Remove and return the oldest pending notification.
    pub fn pop(&self) -> Option<Notification> {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
    }

    /// Take everything currently queued.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .drain(..)
            .collect()
    }

    pub fn pending(&self) -> usize {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_notifications_drain_in_order() {
        let notifier = Notifier::new();
        notifier.success("saved");
        notifier.error("boom");
        let drained = notifier.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].kind, NotificationKind::Success);
        assert_eq!(drained[0].message, "saved");
        assert_eq!(drained[1].kind, NotificationKind::Error);
        assert_eq!(notifier.pending(), 0);
    }

    #[test]
    fn test_empty_messages_are_dropped() {
        let notifier = Notifier::new();
        notifier.success("");
        assert_eq!(notifier.pending(), 0);
    }

    #[test]
    fn test_listener_fires_on_push() {
        let notifier = Notifier::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let count = fired.clone();
        notifier.set_listener(move || {
            count.fetch_add(1, Ordering::SeqCst);
        });
        notifier.success("saved");
        notifier.error("boom");
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}
