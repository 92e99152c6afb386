//! Registration flow: rule-set, cross-field checks and the store append.

use chrono::NaiveDate;

use pontual_core::{Charset, EmployeeId, FieldErrors, TextRule, is_email_shape, validate::check_all};

use crate::birth_date::BirthDateField;
use crate::cpf::{Cpf, CpfField};
use crate::credential::{CredentialRecord, EmployeeProfile};
use crate::store::CredentialStore;

pub const MSG_NAME_MIN: &str = "Nome deve ter pelo menos 2 caracteres";
pub const MSG_BIRTH_DATE_REQUIRED: &str = "Data de nascimento é obrigatória";
pub const MSG_EMAIL_INVALID: &str = "Email inválido";
pub const MSG_POSITION_REQUIRED: &str = "Cargo é obrigatório";
pub const MSG_USERNAME_MIN: &str = "Nome de usuário deve ter pelo menos 3 caracteres";
pub const MSG_USERNAME_CHARSET: &str =
    "Nome de usuário deve conter apenas letras, números e underscore";
pub const MSG_PASSWORD_MIN: &str = "Senha deve ter pelo menos 6 caracteres";
pub const MSG_PASSWORD_MISMATCH: &str = "As senhas não coincidem";

static RULES: &[TextRule] = &[
    TextRule {
        field: "name",
        min_len: 2,
        too_short: MSG_NAME_MIN,
        charset: None,
    },
    TextRule {
        field: "position",
        min_len: 2,
        too_short: MSG_POSITION_REQUIRED,
        charset: None,
    },
    TextRule {
        field: "username",
        min_len: 3,
        too_short: MSG_USERNAME_MIN,
        charset: Some((Charset::Identifier, MSG_USERNAME_CHARSET)),
    },
    TextRule {
        field: "password",
        min_len: 6,
        too_short: MSG_PASSWORD_MIN,
        charset: None,
    },
];

/// Draft of the registration form as the user fills it in. The CPF and birth
/// date fields carry their own input boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub cpf: CpfField,
    pub birth_date: BirthDateField,
    pub email: String,
    pub position: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Run the full rule-set, including the CPF shape, the structured birth
    /// date requirement, the email shape and the password confirmation.
    ///
    /// The confirmation mismatch is attached to the `confirm_password` field
    /// specifically. On success the confirmation is dropped; only the
    /// password itself is retained.
    pub fn validate(&self) -> Result<ValidRegistration, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_all(
            RULES,
            &[
                self.name.as_str(),
                self.position.as_str(),
                self.username.as_str(),
                self.password.as_str(),
            ],
            &mut errors,
        );

        let cpf = match Cpf::parse(self.cpf.as_str()) {
            Ok(cpf) => Some(cpf),
            Err(e) => {
                errors.push("cpf", e.to_string());
                None
            }
        };

        let birth_date = self.birth_date.value();
        if birth_date.is_none() {
            errors.push("birth_date", MSG_BIRTH_DATE_REQUIRED);
        }

        if !is_email_shape(&self.email) {
            errors.push("email", MSG_EMAIL_INVALID);
        }

        if self.confirm_password != self.password {
            errors.push("confirm_password", MSG_PASSWORD_MISMATCH);
        }

        match (cpf, birth_date) {
            (Some(cpf), Some(birth_date)) if errors.is_empty() => Ok(ValidRegistration {
                name: self.name.clone(),
                cpf,
                birth_date,
                email: self.email.clone(),
                position: self.position.clone(),
                username: self.username.clone(),
                password: self.password.clone(),
            }),
            _ => Err(errors),
        }
    }

    /// Reset every field back to empty (the post-confirmation reset).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A registration that passed every rule; ready to become a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub name: String,
    pub cpf: Cpf,
    pub birth_date: NaiveDate,
    pub email: String,
    pub position: String,
    pub username: String,
    pub password: String,
}

impl ValidRegistration {
    pub fn into_record(self) -> CredentialRecord {
        CredentialRecord {
            username: self.username,
            password: self.password,
            profile: Some(EmployeeProfile {
                id: EmployeeId::new(),
                name: self.name,
                email: self.email,
                cpf: self.cpf,
                birth_date: self.birth_date,
                position: self.position,
            }),
        }
    }
}

/// Validate the draft and append the resulting record to the store.
///
/// No uniqueness check against existing usernames is performed (observed
/// behavior of the product); the append itself cannot fail. Returns a clone
/// of the appended record so the caller can persist the registered list.
pub fn register(
    store: &mut CredentialStore,
    form: &RegistrationForm,
) -> Result<CredentialRecord, FieldErrors> {
    let valid = form.validate()?;
    tracing::debug!(username = %valid.username, "registering employee");

    let record = valid.into_record();
    store.append(record.clone());
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm {
            name: "Maria Souza".into(),
            email: "maria@empresa.com.br".into(),
            position: "Analista".into(),
            username: "maria_01".into(),
            password: "segredo1".into(),
            confirm_password: "segredo1".into(),
            ..RegistrationForm::default()
        };
        form.cpf.set("123.456.789-01");
        form.birth_date.set_text("15/03/1990");
        form
    }

    #[test]
    fn valid_form_produces_a_record_with_profile() {
        let mut store = CredentialStore::with_seeds();
        let record = register(&mut store, &filled_form()).unwrap();

        assert_eq!(record.username, "maria_01");
        assert_eq!(record.password, "segredo1");
        let profile = record.profile.as_ref().unwrap();
        assert_eq!(profile.cpf.as_str(), "12345678901");
        assert_eq!(
            profile.birth_date,
            NaiveDate::from_ymd_opt(1990, 3, 15).unwrap()
        );
        assert_eq!(store.registered().len(), 1);
    }

    #[test]
    fn password_mismatch_blocks_the_append_and_marks_the_confirmation_field() {
        let mut store = CredentialStore::with_seeds();
        let mut form = filled_form();
        form.confirm_password = "diferente".into();

        let errors = register(&mut store, &form).unwrap_err();
        assert_eq!(
            errors.first_for("confirm_password"),
            Some(MSG_PASSWORD_MISMATCH)
        );
        assert_eq!(errors.first_for("password"), None);
        assert!(store.registered().is_empty());
    }

    #[test]
    fn missing_birth_date_is_reported_on_the_structured_field() {
        let mut form = filled_form();
        form.birth_date.clear();
        form.birth_date.set_text("31/02/2024");

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.first_for("birth_date"),
            Some(MSG_BIRTH_DATE_REQUIRED)
        );
    }

    #[test]
    fn short_cpf_reports_the_length_message() {
        let mut form = filled_form();
        form.cpf.set("123");

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.first_for("cpf"),
            Some("CPF deve ter exatamente 11 dígitos")
        );
    }

    #[test]
    fn username_rules_follow_the_registration_policy() {
        let mut form = filled_form();
        form.username = "ab".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first_for("username"), Some(MSG_USERNAME_MIN));

        form.username = "maria silva".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first_for("username"), Some(MSG_USERNAME_CHARSET));
    }

    #[test]
    fn short_password_is_rejected_even_when_confirmed() {
        let mut form = filled_form();
        form.password = "curta".into();
        form.confirm_password = "curta".into();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first_for("password"), Some(MSG_PASSWORD_MIN));
        assert_eq!(errors.first_for("confirm_password"), None);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled_form();
        form.email = "maria@empresa".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first_for("email"), Some(MSG_EMAIL_INVALID));
    }

    #[test]
    fn duplicate_username_is_appended_without_complaint() {
        let mut store = CredentialStore::with_seeds();
        register(&mut store, &filled_form()).unwrap();
        register(&mut store, &filled_form()).unwrap();
        assert_eq!(store.registered().len(), 2);
    }

    #[test]
    fn clear_resets_every_field() {
        let mut form = filled_form();
        form.clear();
        assert!(form.is_empty());
        assert_eq!(form.cpf.as_str(), "");
        assert_eq!(form.birth_date.value(), None);
    }
}
