//! Credential records: seed demo accounts plus registered employees.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pontual_core::EmployeeId;

use crate::cpf::Cpf;

/// Profile captured at registration time. Seed accounts have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub cpf: Cpf,
    pub birth_date: NaiveDate,
    pub position: String,
}

/// A stored username/password entry checked during authentication.
///
/// The password is plaintext and compared verbatim; the store is a mock of
/// a backend, not a security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<EmployeeProfile>,
}

impl CredentialRecord {
    /// Profile-less record, as used for the fixed demo accounts.
    pub fn seed(username: &str, password: &str) -> Self {
        Self {
            username: username.to_owned(),
            password: password.to_owned(),
            profile: None,
        }
    }

    /// Display name for the authenticated view: the profile name when the
    /// record has one, the username otherwise.
    pub fn display_name(&self) -> &str {
        self.profile
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or(&self.username)
    }
}

/// Fixed demo accounts, present independent of user registration and never
/// removed.
pub fn seed_records() -> Vec<CredentialRecord> {
    vec![
        CredentialRecord::seed("demo", "demo123"),
        CredentialRecord::seed("admin", "admin123"),
        CredentialRecord::seed("GABRIEL_SANTOS", "Gabi25"),
    ]
}
