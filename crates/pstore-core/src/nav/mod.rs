//! Local view state over the remote listing.
//!
//! [`store::FileStore`] owns the fetched collection and its flags;
//! [`filter`] provides the pure search and sort functions it is viewed
//! through.

pub mod filter;
pub mod store;
