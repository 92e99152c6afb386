//! Login view session.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use pontual_auth::{CredentialStore, LoginInput, authenticate};
use pontual_core::FieldErrors;
use pontual_storage::CredentialStorage;

use crate::contract::{Navigator, Notification, Notifier, Route};
use crate::outcome::OutcomeTask;

/// Default simulated latency before the login decision is revealed. The
/// exact duration is not a contract; it only has to be perceptible.
pub const LOGIN_LATENCY: Duration = Duration::from_millis(1000);

pub const NOTIFY_LOGIN_TITLE: &str = "Login realizado com sucesso!";
pub const NOTIFY_LOGIN_DESCRIPTION: &str = "Bem-vindo ao sistema Pontual.";

#[derive(Debug, Default)]
struct LoginState {
    pending: bool,
    /// The single visible business error; each submission replaces it.
    error: Option<&'static str>,
    field_errors: FieldErrors,
}

/// Login form session.
///
/// Validates input, runs the credential check after the simulated latency,
/// surfaces at most one business error, and navigates to the dashboard on
/// success. Dropping the session cancels a pending outcome.
pub struct LoginSession {
    store: Arc<Mutex<CredentialStore>>,
    state: Arc<Mutex<LoginState>>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    latency: Duration,
    task: Option<OutcomeTask>,
}

impl LoginSession {
    /// Initialize the login view: seed accounts plus the registered records
    /// read (once) from storage.
    pub fn open(
        storage: &CredentialStorage,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let mut store = CredentialStore::with_seeds();
        store.set_registered(storage.load());
        Self::with_store(store, notifier, navigator)
    }

    pub fn with_store(
        store: CredentialStore,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            state: Arc::new(Mutex::new(LoginState::default())),
            notifier,
            navigator,
            latency: LOGIN_LATENCY,
            task: None,
        }
    }

    pub fn set_latency(&mut self, latency: Duration) {
        self.latency = latency;
    }

    /// Submit the form. Returns `false` when the submission was ignored:
    /// either one is already in flight (the submit control is disabled while
    /// pending) or field validation blocked it.
    pub async fn submit(&mut self, input: LoginInput) -> bool {
        {
            let mut state = self.state.lock().await;
            if state.pending {
                return false;
            }
            state.error = None;
            state.field_errors = FieldErrors::new();
            if let Err(errors) = input.validate() {
                state.field_errors = errors;
                return false;
            }
            state.pending = true;
        }

        let store = Arc::clone(&self.store);
        let state = Arc::clone(&self.state);
        let notifier = Arc::clone(&self.notifier);
        let navigator = Arc::clone(&self.navigator);

        self.task = Some(OutcomeTask::schedule(self.latency, async move {
            let outcome = authenticate(&*store.lock().await, &input);

            let mut state = state.lock().await;
            state.pending = false;
            match outcome.error_message() {
                None => {
                    notifier.notify(Notification::new(
                        NOTIFY_LOGIN_TITLE,
                        NOTIFY_LOGIN_DESCRIPTION,
                    ));
                    navigator.navigate(Route::Dashboard);
                }
                Some(message) => state.error = Some(message),
            }
        }));
        true
    }

    pub async fn is_pending(&self) -> bool {
        self.state.lock().await.pending
    }

    /// The currently visible business error, if any.
    pub async fn error(&self) -> Option<&'static str> {
        self.state.lock().await.error
    }

    pub async fn field_errors(&self) -> FieldErrors {
        self.state.lock().await.field_errors.clone()
    }
}
