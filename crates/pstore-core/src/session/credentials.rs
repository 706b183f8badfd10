//! Persistence of the session credential.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::CoreResult;

/// Storage for the single opaque session token.
pub trait CredentialStore: Send + Sync {
    /// Returns the stored token, or `None` if there is none.
    fn load(&self) -> CoreResult<Option<String>>;

    /// Stores `token`, replacing any previous one.
    fn save(&self, token: &str) -> CoreResult<()>;

    /// Deletes the stored token. Clearing an empty store is a no-op.
    fn clear(&self) -> CoreResult<()>;
}

/// Keeps the token in one file on disk.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> CoreResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Creates parent directories if they don't exist.
    fn save(&self, token: &str) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store, used by tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned lock still holds a usable Option.
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> CoreResult<Option<String>> {
        Ok(self.slot().clone())
    }

    fn save(&self, token: &str) -> CoreResult<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        *self.slot() = None;
        Ok(())
    }
}
