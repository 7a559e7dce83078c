//! Toast area for [`Notification`]s produced by the stock table and forms.

use contracts::shared::notification::{Notification, NotificationKind};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Toasts disappear on their own after this delay
const AUTO_DISMISS_MS: u32 = 3_000;

#[derive(Clone, Debug)]
struct Entry {
    id: u64,
    notification: Notification,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    entries: RwSignal<Vec<Entry>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn show(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        match notification.kind {
            NotificationKind::Error => log::warn!("{}: {}", notification.summary, notification.detail),
            _ => log::debug!("{}: {}", notification.summary, notification.detail),
        }
        self.entries.update(|e| e.push(Entry { id, notification }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn show_all(&self, notifications: impl IntoIterator<Item = Notification>) {
        for notification in notifications {
            self.show(notification);
        }
    }

    pub fn dismiss(&self, id: u64) {
        // the host may already be gone when the timer fires
        let _ = self.entries.try_update(|e| e.retain(|entry| entry.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)")
}

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "notification notification--success",
        NotificationKind::Info => "notification notification--info",
        NotificationKind::Warning => "notification notification--warning",
        NotificationKind::Error => "notification notification--error",
    }
}

/// Renders active toasts. Mount once at the application root.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="notifications" aria-live="polite">
            <For
                each=move || svc.entries.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div
                            class=kind_class(entry.notification.kind)
                            role="status"
                            on:click=move |_| svc.dismiss(id)
                        >
                            <strong class="notification__summary">{entry.notification.summary}</strong>
                            <span class="notification__detail">{entry.notification.detail}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
