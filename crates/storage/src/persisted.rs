//! File-backed storage for the registered credential records.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use pontual_auth::CredentialRecord;

/// Fixed key the registered list is stored under. On disk this becomes
/// `{app_data_dir}/pontual/<key>.json`.
pub const REGISTERED_KEY: &str = "registered-employees";

/// Storage handle for the persisted registered-records array.
///
/// Reading degrades silently: a missing file is an empty list, and a
/// corrupted file is logged at warn level and treated as empty; the flows
/// never surface a storage read error to the user.
#[derive(Debug, Clone)]
pub struct CredentialStorage {
    path: PathBuf,
}

impl CredentialStorage {
    /// Storage under the platform data directory
    /// (`{app_data_dir}/pontual/registered-employees.json`).
    pub fn open() -> anyhow::Result<Self> {
        let mut dir = data_dir()?;
        dir.push("pontual");
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create storage directory at {:?}", dir))?;

        dir.push(format!("{REGISTERED_KEY}.json"));
        Ok(Self { path: dir })
    }

    /// Storage at an explicit path (tests, alternate profiles).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read the registered list. Missing file → empty; malformed JSON →
    /// warn + empty.
    pub fn load(&self) -> Vec<CredentialRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "failed to read credential storage: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "malformed credential storage, starting with an empty registered list: {err}"
                );
                Vec::new()
            }
        }
    }

    /// Write the whole registered list back.
    pub fn save(&self, records: &[CredentialRecord]) -> anyhow::Result<()> {
        let payload = serde_json::to_string_pretty(records)
            .context("failed to serialize registered records")?;
        fs::write(&self.path, payload)
            .with_context(|| format!("failed to write credential storage at {:?}", self.path))?;
        Ok(())
    }
}

/// Resolve the OS app data directory, falling back to `~/.local/share`.
fn data_dir() -> anyhow::Result<PathBuf> {
    dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")
}
