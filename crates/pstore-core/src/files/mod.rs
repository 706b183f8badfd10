//! Remote file records and their display formatting.
//!
//! [`record::FileRecord`] mirrors one entry of the API's file listing;
//! [`format`] turns sizes and timestamps into the strings frontends show.

pub mod format;
pub mod record;

pub use format::{format_date, format_size};
pub use record::{FileRecord, FileRow};
