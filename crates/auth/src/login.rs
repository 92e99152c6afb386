//! Login flow: rule-set plus the ordered credential check.

use pontual_core::{FieldErrors, TextRule, validate::check_all};

use crate::store::CredentialStore;

pub const MSG_USERNAME_REQUIRED: &str = "Nome de usuário é obrigatório";
pub const MSG_PASSWORD_REQUIRED: &str = "Senha é obrigatória";
pub const MSG_USER_NOT_FOUND: &str =
    "Usuário não encontrado. Verifique o nome de usuário ou registre-se.";
pub const MSG_WRONG_PASSWORD: &str = "Senha incorreta. Por favor, tente novamente.";

static RULES: &[TextRule] = &[
    TextRule {
        field: "username",
        min_len: 1,
        too_short: MSG_USERNAME_REQUIRED,
        charset: None,
    },
    TextRule {
        field: "password",
        min_len: 1,
        too_short: MSG_PASSWORD_REQUIRED,
        charset: None,
    },
];

/// The two login fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

impl LoginInput {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Run the login rule-set. A failure blocks submission entirely.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_all(
            RULES,
            &[self.username.as_str(), self.password.as_str()],
            &mut errors,
        );
        errors.into_result()
    }
}

/// Tri-state outcome of one login submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    UserNotFound,
    IncorrectPassword,
}

impl LoginOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, LoginOutcome::Success)
    }

    /// Inline error text for the form; `None` on success.
    pub fn error_message(self) -> Option<&'static str> {
        match self {
            LoginOutcome::Success => None,
            LoginOutcome::UserNotFound => Some(MSG_USER_NOT_FOUND),
            LoginOutcome::IncorrectPassword => Some(MSG_WRONG_PASSWORD),
        }
    }
}

/// Decide a login attempt against the store. Ordered, first match wins:
/// registered records are consulted before seed accounts, and once a record
/// matches the username the password is compared verbatim; a mismatch there
/// never falls through to a later record. Exactly one outcome per call.
pub fn authenticate(store: &CredentialStore, input: &LoginInput) -> LoginOutcome {
    tracing::debug!(username = %input.username, "login attempt");

    let Some(record) = store.find(&input.username) else {
        return LoginOutcome::UserNotFound;
    };

    if record.password == input.password {
        LoginOutcome::Success
    } else {
        LoginOutcome::IncorrectPassword
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::CredentialRecord;

    #[test]
    fn empty_fields_fail_validation() {
        let errors = LoginInput::default().validate().unwrap_err();
        assert_eq!(errors.first_for("username"), Some(MSG_USERNAME_REQUIRED));
        assert_eq!(errors.first_for("password"), Some(MSG_PASSWORD_REQUIRED));
    }

    #[test]
    fn any_non_empty_fields_pass_validation() {
        assert!(LoginInput::new("d", "x").validate().is_ok());
    }

    #[test]
    fn unknown_username_yields_not_found() {
        let store = CredentialStore::with_seeds();
        let outcome = authenticate(&store, &LoginInput::new("ninguem", "qualquer"));
        assert_eq!(outcome, LoginOutcome::UserNotFound);
        assert_eq!(outcome.error_message(), Some(MSG_USER_NOT_FOUND));
    }

    #[test]
    fn seed_account_with_wrong_password_yields_incorrect_password() {
        let store = CredentialStore::with_seeds();
        let outcome = authenticate(&store, &LoginInput::new("demo", "errada"));
        assert_eq!(outcome, LoginOutcome::IncorrectPassword);
        assert_eq!(outcome.error_message(), Some(MSG_WRONG_PASSWORD));
    }

    #[test]
    fn seed_account_with_matching_password_succeeds() {
        let store = CredentialStore::with_seeds();
        for (username, password) in [
            ("demo", "demo123"),
            ("admin", "admin123"),
            ("GABRIEL_SANTOS", "Gabi25"),
        ] {
            let outcome = authenticate(&store, &LoginInput::new(username, password));
            assert!(outcome.is_success(), "{username} should log in");
        }
    }

    #[test]
    fn registered_record_takes_precedence_over_seed() {
        let mut store = CredentialStore::with_seeds();
        store.append(CredentialRecord::seed("demo", "nova-senha"));

        // The registered password wins...
        let outcome = authenticate(&store, &LoginInput::new("demo", "nova-senha"));
        assert!(outcome.is_success());

        // ...and the seed password no longer matches: the check stops at the
        // registered record instead of falling through.
        let outcome = authenticate(&store, &LoginInput::new("demo", "demo123"));
        assert_eq!(outcome, LoginOutcome::IncorrectPassword);
    }

    #[test]
    fn register_then_authenticate_round_trip() {
        let mut store = CredentialStore::with_seeds();
        store.append(CredentialRecord::seed("maria_01", "segredo1"));

        let outcome = authenticate(&store, &LoginInput::new("maria_01", "segredo1"));
        assert!(outcome.is_success());
    }
}
