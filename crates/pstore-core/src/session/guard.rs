//! Session guard: the explicit session context handed to the synchronizer.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{ApiError, CoreError, CoreResult};
use crate::event::Event;
use crate::session::credentials::CredentialStore;

/// Decides whether a request may be sent and ends the session when the
/// credential is missing, rejected, or the user logs out.
///
/// Leaving the authenticated state is one-way: nothing here retries or
/// restores a cleared credential.
pub struct SessionGuard<S> {
    store: Arc<S>,
    logout_delay: Duration,
}

impl<S: CredentialStore> SessionGuard<S> {
    pub fn new(store: Arc<S>, logout_delay: Duration) -> Self {
        Self {
            store,
            logout_delay,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Returns the stored credential.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthenticated`] when no credential is stored or the
    /// store cannot be read.
    pub fn credential(&self) -> Result<String, ApiError> {
        match self.store.load() {
            Ok(Some(token)) => Ok(token),
            Ok(None) => {
                tracing::debug!("no stored credential");
                Err(ApiError::Unauthenticated)
            }
            Err(e) => {
                tracing::warn!("failed to read stored credential: {e}");
                Err(ApiError::Unauthenticated)
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential().is_ok()
    }

    /// Stores a token issued by the external login flow.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidToken`] for an empty token; storage errors otherwise.
    pub fn login(&self, token: &str) -> CoreResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(CoreError::InvalidToken("token is empty".to_string()));
        }
        self.store.save(token)?;
        tracing::info!("credential stored");
        Ok(())
    }

    /// Purges a credential the server reported as invalid.
    pub fn invalidate(&self) -> Event {
        tracing::warn!("server rejected credential, clearing session");
        if let Err(e) = self.store.clear() {
            tracing::error!("failed to clear rejected credential: {e}");
        }
        Event::RedirectToLogin
    }

    /// Clears the credential, waits the logout delay, then signals the
    /// redirect. The credential is gone before the delay starts.
    pub async fn logout(&self) -> Event {
        if let Err(e) = self.store.clear() {
            tracing::error!("failed to clear credential on logout: {e}");
        }
        tracing::info!(
            "logged out, redirecting in {}s",
            self.logout_delay.as_secs()
        );
        tokio::time::sleep(self.logout_delay).await;
        Event::RedirectToLogin
    }
}
