//! pstore core library — UI-agnostic client for a personal storage service.
//!
//! `pstore-core` holds everything a dashboard frontend needs besides
//! rendering: the session guard, the HTTP client for the storage API, the
//! in-memory file listing and its synchronization with the server.
//!
//! # Modules
//!
//! - [`api`] — The [`FileApi`] seam and its `reqwest` implementation.
//! - [`session`] — Credential persistence and the [`SessionGuard`].
//! - [`files`] — [`FileRecord`] and size/date formatting.
//! - [`nav`] — The [`FileStore`] listing state, search and sorting.
//! - [`sync`] — [`FileListSynchronizer`], which ties the above together.
//! - [`config`] — TOML-based client settings with environment overrides.
//! - [`event`] — Command and event types for frontend ↔ core communication.
//! - [`error`] — [`CoreError`] for local failures, [`ApiError`] for remote ones.

pub mod api;
pub mod config;
pub mod error;
pub mod event;
pub mod files;
pub mod nav;
pub mod session;
pub mod sync;

pub use api::{FileApi, HttpFileApi};
pub use config::settings::Config;
pub use error::{ApiError, CoreError, CoreResult};
pub use event::{Command, Event};
pub use files::{format_date, format_size, FileRecord, FileRow};
pub use nav::filter::{filter_by_name, sort_records, SortDirection, SortField};
pub use nav::store::FileStore;
pub use session::{CredentialStore, FileCredentialStore, MemoryCredentialStore, SessionGuard};
pub use sync::FileListSynchronizer;
