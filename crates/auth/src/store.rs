//! Mock credential store: fixed seed accounts plus runtime registrations.

use crate::credential::{CredentialRecord, seed_records};

/// In-memory credential store backing the authentication flows.
///
/// The store is constructed explicitly and passed into each flow, never an
/// ambient singleton. Loading previously registered records and writing them
/// back are both explicit steps owned by the caller
/// ([`CredentialStore::set_registered`] / [`CredentialStore::registered`]).
///
/// # Invariants
/// - Seed records are always present and never removed.
/// - Registered records are appended, never mutated or deleted.
/// - Lookup scans registered records before seeds, in append order, first
///   match wins; a registered record shadows a seed with the same username.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    seeds: Vec<CredentialRecord>,
    registered: Vec<CredentialRecord>,
}

impl CredentialStore {
    /// Store holding only the fixed seed accounts.
    pub fn with_seeds() -> Self {
        Self {
            seeds: seed_records(),
            registered: Vec::new(),
        }
    }

    /// Explicit load step: replace the registered list with records read from
    /// storage.
    pub fn set_registered(&mut self, records: Vec<CredentialRecord>) {
        self.registered = records;
    }

    /// Append a newly registered record.
    ///
    /// No uniqueness check is performed: two records may share a username,
    /// and [`CredentialStore::find`] returns the earliest appended one.
    pub fn append(&mut self, record: CredentialRecord) {
        self.registered.push(record);
    }

    /// Look a username up: registered records first, then seeds.
    pub fn find(&self, username: &str) -> Option<&CredentialRecord> {
        self.registered
            .iter()
            .find(|r| r.username == username)
            .or_else(|| self.seeds.iter().find(|r| r.username == username))
    }

    /// Registered records, in append order, for the persistence write step.
    pub fn registered(&self) -> &[CredentialRecord] {
        &self.registered
    }

    pub fn seeds(&self) -> &[CredentialRecord] {
        &self.seeds
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::with_seeds()
    }
}
