use dioxus::prelude::*;

use crate::notify::{Notification, NotificationKind, NOTIFIER};

/// Visible toasts, fed from the process-wide notification queue.
pub static TOASTS: GlobalSignal<Vec<Notification>> = Signal::global(Vec::new);

#[component]
pub fn ToastHost() -> Element {
    use_effect(move || {
        // Flush anything queued before this host mounted, then follow
        // gateway pushes as they happen.
        let backlog = NOTIFIER.drain();
        if !backlog.is_empty() {
            TOASTS.write().extend(backlog);
        }
        NOTIFIER.set_listener(|| {
            TOASTS.write().extend(NOTIFIER.drain());
        });
    });

    let toasts = TOASTS.read().clone();

    rsx! {
        div {
            class: "fixed top-4 right-4 z-50 space-y-2",
            for (idx, toast) in toasts.iter().enumerate() {
                ToastItem { index: idx, toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(index: usize, toast: Notification) -> Element {
    let class = match toast.kind {
        NotificationKind::Success => {
            "px-4 py-3 rounded-lg shadow-lg bg-green-50 border border-green-200 text-green-800 text-sm"
        }
        NotificationKind::Error => {
            "px-4 py-3 rounded-lg shadow-lg bg-red-50 border border-red-200 text-red-800 text-sm"
        }
    };

    rsx! {
        div {
            class: "{class} flex items-center gap-3",
            span { "{toast.message}" }
            button {
                class: "text-xs text-gray-500 hover:text-gray-700",
                onclick: move |_| {
                    let mut toasts = TOASTS.write();
                    if index < toasts.len() {
                        toasts.remove(index);
                    }
                },
                "Dismiss"
            }
        }
    }
}
