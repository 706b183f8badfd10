//! Keeps the local file listing in step with the remote service.
//!
//! [`FileListSynchronizer`] owns the [`FileStore`] for one view. Every
//! remote failure is absorbed here and reported as an [`Event`]; a
//! rejected credential goes through the [`SessionGuard`] instead of the
//! generic error path.

use std::sync::Arc;

use crate::api::FileApi;
use crate::error::ApiError;
use crate::event::{Command, Event};
use crate::nav::store::FileStore;
use crate::session::{CredentialStore, SessionGuard};

/// User-facing message for any fetch failure that is not an auth problem.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch files";

/// User-facing message for a delete the server refused.
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete file";

pub struct FileListSynchronizer<A, S> {
    api: Arc<A>,
    guard: SessionGuard<S>,
    store: FileStore,
}

impl<A: FileApi, S: CredentialStore> FileListSynchronizer<A, S> {
    pub fn new(api: Arc<A>, guard: SessionGuard<S>) -> Self {
        Self {
            api,
            guard,
            store: FileStore::new(),
        }
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    pub fn guard(&self) -> &SessionGuard<S> {
        &self.guard
    }

    /// Fetches the listing and replaces the local collection.
    ///
    /// Without a credential no request is sent. The loading flag is
    /// cleared on every path out of this function.
    pub async fn fetch_files(&mut self) -> Event {
        let token = match self.guard.credential() {
            Ok(token) => token,
            Err(_) => return Event::RedirectToLogin,
        };

        let result = {
            let _loading = LoadingGuard::begin(&mut self.store);
            self.api.list_files(&token).await
        };

        match result {
            Ok(records) => {
                let count = records.len();
                self.store.load(records);
                tracing::info!("loaded {count} files");
                Event::FilesLoaded { count }
            }
            Err(e) => self.fetch_failed(e),
        }
    }

    fn fetch_failed(&mut self, error: ApiError) -> Event {
        if error.requires_login() {
            return self.guard.invalidate();
        }
        tracing::warn!("fetching files failed: {error}");
        self.store.set_error(FETCH_FAILED_MESSAGE);
        Event::FetchFailed {
            message: FETCH_FAILED_MESSAGE.to_string(),
        }
    }

    /// Changes the search term; the visible set is recomputed on read.
    pub fn search(&mut self, term: impl Into<String>) -> Event {
        self.store.set_search_term(term);
        Event::SearchUpdated {
            visible: self.store.visible().len(),
        }
    }

    /// Drops a record deleted elsewhere, without re-fetching.
    pub fn reconcile_delete(&mut self, id: &str) -> Event {
        if self.store.remove(id) {
            tracing::debug!("removed {id} from listing");
            Event::FileRemoved { id: id.to_string() }
        } else {
            Event::FileNotFound { id: id.to_string() }
        }
    }

    /// Deletes `id` on the server, then reconciles the local listing.
    pub async fn delete_file(&mut self, id: &str) -> Event {
        let token = match self.guard.credential() {
            Ok(token) => token,
            Err(_) => return Event::RedirectToLogin,
        };

        match self.api.delete_file(&token, id).await {
            Ok(()) => self.reconcile_delete(id),
            Err(e) if e.requires_login() => self.guard.invalidate(),
            Err(e) => {
                tracing::warn!("deleting {id} failed: {e}");
                Event::DeleteFailed {
                    id: id.to_string(),
                    message: DELETE_FAILED_MESSAGE.to_string(),
                }
            }
        }
    }

    /// Dispatches one frontend command.
    pub async fn handle(&mut self, command: Command) -> Event {
        match command {
            Command::Refresh => self.fetch_files().await,
            Command::Search(term) => self.search(term),
            Command::Delete(id) => self.delete_file(&id).await,
            Command::Reconcile(id) => self.reconcile_delete(&id),
            Command::Login(token) => match self.guard.login(&token) {
                Ok(()) => Event::LoggedIn,
                Err(e) => Event::LoginFailed {
                    message: e.to_string(),
                },
            },
            Command::Logout => self.guard.logout().await,
        }
    }
}

/// Holds the store's loading flag up until dropped, including when the
/// fetch future is cancelled or unwinds.
struct LoadingGuard<'a>(&'a mut FileStore);

impl<'a> LoadingGuard<'a> {
    fn begin(store: &'a mut FileStore) -> Self {
        store.set_loading(true);
        store.clear_error();
        Self(store)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set_loading(false);
    }
}
