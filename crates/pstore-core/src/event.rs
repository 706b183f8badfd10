//! Event system for communication between a frontend and the core.
//!
//! The frontend translates user input into [`Command`]s, which the
//! synchronizer processes and answers with [`Event`]s. Every failure of a
//! remote call ends up as an event; none escape as errors.

/// An action the frontend requests the core to perform.
///
/// Commands flow **frontend → core**.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-fetch the file listing.
    Refresh,
    /// Change the search term the listing is viewed through.
    Search(String),
    /// Delete the file with the given id on the server, then drop it locally.
    Delete(String),
    /// Drop a file deleted elsewhere from the local listing.
    Reconcile(String),
    /// Store a token issued by the external login flow.
    Login(String),
    /// End the session.
    Logout,
}

/// A notification the core sends back to the frontend.
///
/// Events flow **core → frontend**.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The listing was fetched and replaced.
    FilesLoaded {
        /// Number of records now in the collection.
        count: usize,
    },
    /// The listing could not be fetched; `message` is user-facing.
    FetchFailed { message: String },
    /// The search term changed; `visible` records now match.
    SearchUpdated { visible: usize },
    /// A record was dropped from the local listing.
    FileRemoved { id: String },
    /// No local record carried the id; nothing changed.
    FileNotFound { id: String },
    /// The server refused to delete a file; `message` is user-facing.
    DeleteFailed { id: String, message: String },
    /// A token was stored.
    LoggedIn,
    /// Login failed locally (e.g. an empty token).
    LoginFailed { message: String },
    /// The session is missing or over; the frontend should show login.
    RedirectToLogin,
}
