//! `pontual-app` — session shell for the authentication and dashboard views.
//!
//! Each form gets one session object: it owns the draft input, gates
//! submissions (one in flight per form), schedules the simulated backend
//! latency as a cancellable task, and talks to the presentation shell only
//! through the [`Notifier`] and [`Navigator`] seams.

pub mod contract;
pub mod dashboard;
pub mod login_session;
pub mod outcome;
pub mod recovery_session;
pub mod registration_session;

pub use contract::{Navigator, Notification, Notifier, Route};
pub use dashboard::Dashboard;
pub use login_session::LoginSession;
pub use outcome::OutcomeTask;
pub use recovery_session::{RecoveryPhase, RecoverySession};
pub use registration_session::{RegistrationPhase, RegistrationSession};
