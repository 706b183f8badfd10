//! Access to the remote storage API.
//!
//! [`FileApi`] is the seam between the synchronizer and the network;
//! [`http::HttpFileApi`] is the production implementation over `reqwest`.

pub mod http;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::files::record::FileRecord;

pub use http::HttpFileApi;

/// Operations the dashboard needs from the storage service.
#[async_trait]
pub trait FileApi: Send + Sync {
    /// Fetches the full file listing in server order.
    async fn list_files(&self, token: &str) -> Result<Vec<FileRecord>, ApiError>;

    /// Deletes the file with `id` on the server.
    async fn delete_file(&self, token: &str, id: &str) -> Result<(), ApiError>;
}
