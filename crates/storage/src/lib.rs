//! `pontual-storage` — persisted registered-employees list.
//!
//! A single JSON array of credential records under a fixed key, read once
//! when the authentication view initializes and written whenever the
//! registration flow appends a record.

pub mod persisted;

pub use persisted::{CredentialStorage, REGISTERED_KEY};
