//! Password recovery flow: email rule-set and the simulated delivery check.

use pontual_core::{FieldErrors, is_email_shape};

pub const MSG_EMAIL_REQUIRED: &str = "Email é obrigatório";
pub const MSG_EMAIL_INVALID: &str = "Email inválido";
pub const MSG_EMAIL_NOT_FOUND: &str =
    "Email não encontrado. Verifique o email informado ou cadastre-se.";

/// The single address that simulates an unknown account. Every other
/// syntactically valid email "receives" the recovery message.
pub const UNKNOWN_EMAIL: &str = "nonexistent@example.com";

/// The recovery form's one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryInput {
    pub email: String,
}

impl RecoveryInput {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.email.is_empty() {
            errors.push("email", MSG_EMAIL_REQUIRED);
        } else if !is_email_shape(&self.email) {
            errors.push("email", MSG_EMAIL_INVALID);
        }
        errors.into_result()
    }
}

/// Outcome of one recovery submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryOutcome {
    /// The confirmation state; terminal for this flow instance.
    Sent,
    /// Sentinel matched; the form returns to collecting input.
    EmailNotFound,
}

impl RecoveryOutcome {
    pub fn is_sent(self) -> bool {
        matches!(self, RecoveryOutcome::Sent)
    }

    pub fn error_message(self) -> Option<&'static str> {
        match self {
            RecoveryOutcome::Sent => None,
            RecoveryOutcome::EmailNotFound => Some(MSG_EMAIL_NOT_FOUND),
        }
    }
}

/// Decide a recovery request: the sentinel address is "not found", anything
/// else that reached this point (post-validation) is "sent".
pub fn request_recovery(input: &RecoveryInput) -> RecoveryOutcome {
    tracing::debug!(email = %input.email, "recovery request");

    if input.email == UNKNOWN_EMAIL {
        RecoveryOutcome::EmailNotFound
    } else {
        RecoveryOutcome::Sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_required() {
        let errors = RecoveryInput::default().validate().unwrap_err();
        assert_eq!(errors.first_for("email"), Some(MSG_EMAIL_REQUIRED));
    }

    #[test]
    fn malformed_email_is_invalid() {
        let errors = RecoveryInput::new("sem-arroba").validate().unwrap_err();
        assert_eq!(errors.first_for("email"), Some(MSG_EMAIL_INVALID));
    }

    #[test]
    fn sentinel_email_is_never_found() {
        let input = RecoveryInput::new(UNKNOWN_EMAIL);
        assert!(input.validate().is_ok());

        let outcome = request_recovery(&input);
        assert_eq!(outcome, RecoveryOutcome::EmailNotFound);
        assert_eq!(outcome.error_message(), Some(MSG_EMAIL_NOT_FOUND));
    }

    #[test]
    fn any_other_valid_email_is_sent() {
        for email in ["a@b.co", "maria@empresa.com.br", "existent@example.com"] {
            let outcome = request_recovery(&RecoveryInput::new(email));
            assert!(outcome.is_sent(), "{email} should receive the message");
        }
    }
}
