//! Password-recovery view session.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use pontual_auth::{RecoveryInput, request_recovery};
use pontual_core::FieldErrors;

use crate::contract::{Notification, Notifier};
use crate::outcome::OutcomeTask;

/// Default simulated latency before the recovery outcome is revealed.
pub const RECOVERY_LATENCY: Duration = Duration::from_millis(1000);

pub const NOTIFY_RECOVERY_TITLE: &str = "Email de recuperação enviado!";
pub const NOTIFY_RECOVERY_DESCRIPTION: &str =
    "Verifique sua caixa de entrada para redefinir sua senha.";

/// Recovery view phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryPhase {
    #[default]
    Collecting,
    Pending,
    /// "Email sent" confirmation; terminal for this flow instance (no
    /// automatic reset, only the link back to login).
    Sent,
}

#[derive(Debug, Default)]
struct RecoveryState {
    phase: RecoveryPhase,
    error: Option<&'static str>,
    field_errors: FieldErrors,
}

/// Recovery form session.
pub struct RecoverySession {
    state: Arc<Mutex<RecoveryState>>,
    notifier: Arc<dyn Notifier>,
    latency: Duration,
    task: Option<OutcomeTask>,
}

impl RecoverySession {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: Arc::new(Mutex::new(RecoveryState::default())),
            notifier,
            latency: RECOVERY_LATENCY,
            task: None,
        }
    }

    pub fn set_latency(&mut self, latency: Duration) {
        self.latency = latency;
    }

    /// Submit the form. Returns `false` when ignored (pending, or already in
    /// the terminal sent state) or blocked by field validation.
    pub async fn submit(&mut self, input: RecoveryInput) -> bool {
        {
            let mut state = self.state.lock().await;
            if state.phase != RecoveryPhase::Collecting {
                return false;
            }
            state.error = None;
            state.field_errors = FieldErrors::new();
            if let Err(errors) = input.validate() {
                state.field_errors = errors;
                return false;
            }
            state.phase = RecoveryPhase::Pending;
        }

        let state = Arc::clone(&self.state);
        let notifier = Arc::clone(&self.notifier);

        self.task = Some(OutcomeTask::schedule(self.latency, async move {
            let outcome = request_recovery(&input);

            let mut state = state.lock().await;
            match outcome.error_message() {
                Some(message) => {
                    state.phase = RecoveryPhase::Collecting;
                    state.error = Some(message);
                }
                None => {
                    state.phase = RecoveryPhase::Sent;
                    notifier.notify(Notification::new(
                        NOTIFY_RECOVERY_TITLE,
                        NOTIFY_RECOVERY_DESCRIPTION,
                    ));
                }
            }
        }));
        true
    }

    pub async fn phase(&self) -> RecoveryPhase {
        self.state.lock().await.phase
    }

    pub async fn error(&self) -> Option<&'static str> {
        self.state.lock().await.error
    }

    pub async fn field_errors(&self) -> FieldErrors {
        self.state.lock().await.field_errors.clone()
    }
}
