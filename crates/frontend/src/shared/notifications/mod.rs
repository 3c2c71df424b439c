//! Toast notifications.
//!
//! `NotificationChannel` is built once in `App` and provided through context.
//! Every posted message schedules its own dismissal.

pub mod scheduler;
pub mod toast_stack;

pub use scheduler::{BrowserScheduler, ManualScheduler, Scheduler};
pub use toast_stack::ToastStack;

use crate::config::config;
use leptos::prelude::*;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Severity::Success => "toast--success",
            Severity::Error => "toast--error",
            Severity::Info => "toast--info",
            Severity::Warning => "toast--warning",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Severity::Success => "check",
            Severity::Error => "alert-circle",
            Severity::Info => "info",
            Severity::Warning => "alert-triangle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub ttl_ms: u32,
}

#[derive(Clone)]
pub struct NotificationChannel {
    items: RwSignal<Vec<Notification>>,
    scheduler: Arc<dyn Scheduler>,
    default_ttl_ms: u32,
}

impl NotificationChannel {
    pub fn new(scheduler: Arc<dyn Scheduler>, default_ttl_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            scheduler,
            default_ttl_ms,
        }
    }

    /// Channel on browser timers with the configured ttl
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserScheduler), config().notifications.default_ttl_ms)
    }

    pub fn default_ttl_ms(&self) -> u32 {
        self.default_ttl_ms
    }

    pub fn post(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.post_with_ttl(message, severity, self.default_ttl_ms)
    }

    pub fn post_with_ttl(
        &self,
        message: impl Into<String>,
        severity: Severity,
        ttl_ms: u32,
    ) -> NotificationId {
        let notification = Notification {
            id: NotificationId::new_v4(),
            message: message.into(),
            severity,
            ttl_ms,
        };
        let id = notification.id;
        log::debug!("toast {:?}: {}", severity, notification.message);
        self.items.update(|items| items.push(notification));

        let items = self.items;
        self.scheduler
            .schedule(ttl_ms, Box::new(move || remove(items, id)));
        id
    }

    /// Remove a notification; unknown ids are ignored
    pub fn dismiss(&self, id: NotificationId) {
        remove(self.items, id);
    }

    /// Notifications currently shown, oldest first
    pub fn active(&self) -> Vec<Notification> {
        self.items.get_untracked()
    }

    /// Reactive view for the toast stack
    pub fn items(&self) -> ReadSignal<Vec<Notification>> {
        self.items.read_only()
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.post(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.post(message, Severity::Error)
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.post(message, Severity::Info)
    }

    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.post(message, Severity::Warning)
    }
}

/// The timer may fire after the owning view is gone, so the signal is only
/// touched if it still exists.
fn remove(items: RwSignal<Vec<Notification>>, id: NotificationId) {
    let present = items
        .try_with_untracked(|list| list.iter().any(|n| n.id == id))
        .unwrap_or(false);
    if present {
        items.try_update(|list| list.retain(|n| n.id != id));
    }
}

pub fn use_notifications() -> NotificationChannel {
    expect_context::<NotificationChannel>()
}
