//! `pontual-auth` — credential records, mock credential store and the
//! validate→decide logic of the login, registration and recovery flows.
//!
//! This crate is intentionally decoupled from the presentation shell and from
//! storage: flows operate on an injected [`CredentialStore`], and outcomes are
//! plain values the session layer turns into notifications and navigation.

pub mod birth_date;
pub mod cpf;
pub mod credential;
pub mod login;
pub mod recovery;
pub mod registration;
pub mod store;

pub use birth_date::BirthDateField;
pub use cpf::{CPF_LEN, Cpf, CpfField, CpfParseError};
pub use credential::{CredentialRecord, EmployeeProfile, seed_records};
pub use login::{LoginInput, LoginOutcome, authenticate};
pub use recovery::{RecoveryInput, RecoveryOutcome, UNKNOWN_EMAIL, request_recovery};
pub use registration::{RegistrationForm, ValidRegistration, register};
pub use store::CredentialStore;
