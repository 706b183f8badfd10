//! Session lifecycle: credential persistence and the guard that enforces it.

pub mod credentials;
pub mod guard;

pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use guard::SessionGuard;
