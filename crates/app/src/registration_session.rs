//! Registration view session.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use pontual_auth::{CredentialStore, RegistrationForm, register};
use pontual_core::FieldErrors;
use pontual_storage::CredentialStorage;

use crate::contract::{Notification, Notifier};
use crate::outcome::OutcomeTask;

/// Default simulated latency before the registration completes.
pub const REGISTRATION_LATENCY: Duration = Duration::from_millis(1500);

/// How long the confirmation panel stays up before the form resets.
pub const CONFIRMATION_INTERVAL: Duration = Duration::from_millis(3000);

pub const NOTIFY_REGISTERED_TITLE: &str = "Registro concluído com sucesso!";
pub const NOTIFY_REGISTERED_DESCRIPTION: &str = "Você já pode fazer login no sistema.";

/// Registration view phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationPhase {
    /// The form is editable.
    #[default]
    Collecting,
    /// A submission is in flight; the submit control is disabled.
    Pending,
    /// The confirmation panel is showing; it offers a link to the login view
    /// and clears back to [`RegistrationPhase::Collecting`] on its own.
    Confirmed,
}

#[derive(Debug, Default)]
struct RegistrationState {
    form: RegistrationForm,
    phase: RegistrationPhase,
    field_errors: FieldErrors,
}

/// Registration form session.
///
/// Owns the draft, appends the validated record to the store, writes the
/// registered list to storage, and drives the confirmation state through its
/// display interval before resetting the fields, all without navigation, so
/// a fresh registration can follow immediately.
pub struct RegistrationSession {
    store: Arc<Mutex<CredentialStore>>,
    storage: CredentialStorage,
    state: Arc<Mutex<RegistrationState>>,
    notifier: Arc<dyn Notifier>,
    latency: Duration,
    confirmation: Duration,
    task: Option<OutcomeTask>,
}

impl RegistrationSession {
    /// Initialize the registration view against the same persisted list the
    /// login view reads.
    pub fn open(storage: CredentialStorage, notifier: Arc<dyn Notifier>) -> Self {
        let mut store = CredentialStore::with_seeds();
        store.set_registered(storage.load());
        Self::with_store(store, storage, notifier)
    }

    pub fn with_store(
        store: CredentialStore,
        storage: CredentialStorage,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            storage,
            state: Arc::new(Mutex::new(RegistrationState::default())),
            notifier,
            latency: REGISTRATION_LATENCY,
            confirmation: CONFIRMATION_INTERVAL,
            task: None,
        }
    }

    pub fn set_latency(&mut self, latency: Duration) {
        self.latency = latency;
    }

    pub fn set_confirmation_interval(&mut self, interval: Duration) {
        self.confirmation = interval;
    }

    /// Edit the draft in place. Ignored outside the collecting phase.
    pub async fn edit(&self, apply: impl FnOnce(&mut RegistrationForm)) {
        let mut state = self.state.lock().await;
        if state.phase == RegistrationPhase::Collecting {
            apply(&mut state.form);
        }
    }

    /// Submit the draft. Returns `false` when ignored (not collecting) or
    /// blocked by field validation.
    pub async fn submit(&mut self) -> bool {
        let form = {
            let mut state = self.state.lock().await;
            if state.phase != RegistrationPhase::Collecting {
                return false;
            }
            state.field_errors = FieldErrors::new();
            if let Err(errors) = state.form.validate() {
                state.field_errors = errors;
                return false;
            }
            state.phase = RegistrationPhase::Pending;
            state.form.clone()
        };

        let store = Arc::clone(&self.store);
        let state = Arc::clone(&self.state);
        let notifier = Arc::clone(&self.notifier);
        let storage = self.storage.clone();
        let confirmation = self.confirmation;

        self.task = Some(OutcomeTask::schedule(self.latency, async move {
            {
                let mut store_guard = store.lock().await;
                let mut state_guard = state.lock().await;
                match register(&mut store_guard, &form) {
                    Ok(_) => {
                        if let Err(err) = storage.save(store_guard.registered()) {
                            tracing::error!("failed to persist registered records: {err:?}");
                        }
                        state_guard.phase = RegistrationPhase::Confirmed;
                        notifier.notify(Notification::new(
                            NOTIFY_REGISTERED_TITLE,
                            NOTIFY_REGISTERED_DESCRIPTION,
                        ));
                    }
                    Err(errors) => {
                        state_guard.phase = RegistrationPhase::Collecting;
                        state_guard.field_errors = errors;
                        return;
                    }
                }
            }

            // Confirmation display interval, then reset for the next
            // registration.
            tokio::time::sleep(confirmation).await;
            let mut state_guard = state.lock().await;
            state_guard.form.clear();
            state_guard.phase = RegistrationPhase::Collecting;
        }));
        true
    }

    pub async fn phase(&self) -> RegistrationPhase {
        self.state.lock().await.phase
    }

    pub async fn form(&self) -> RegistrationForm {
        self.state.lock().await.form.clone()
    }

    pub async fn field_errors(&self) -> FieldErrors {
        self.state.lock().await.field_errors.clone()
    }
}
