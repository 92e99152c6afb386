//! Seams to the presentation shell (layout, routing and toast rendering live
//! outside this core).

use serde::Serialize;

/// A transient, dismissible notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Success notifications go through this seam; inline validation and business
/// errors do not (they are surfaced as session state next to the form).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// The navigable views of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    Recovery,
    Dashboard,
}

/// Programmatic navigation seam. Links rendered inside a view (e.g. the
/// confirmation panel's "go to login") are the shell's concern, not ours.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
