//! Searching and sorting of file records.
//!
//! Everything here is pure: inputs are never mutated, and the stored
//! collection keeps server order regardless of how it is displayed.

use crate::files::record::FileRecord;

/// Returns the records whose original name contains `term`, ignoring case.
///
/// An empty term returns every record, in order.
pub fn filter_by_name<'a>(records: &'a [FileRecord], term: &str) -> Vec<&'a FileRecord> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| r.original_name().to_lowercase().contains(&needle))
        .collect()
}

/// The field by which records are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Sort alphabetically by original name (case-insensitive).
    Name,
    /// Sort by size in bytes.
    Size,
    /// Sort by creation time; records without one come first.
    Date,
    /// Sort by MIME type.
    Type,
}

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Returns a new `Vec` of the records sorted by `field` and `direction`.
///
/// The sort is stable, so ties keep their server order.
pub fn sort_records<'a>(
    records: &[&'a FileRecord],
    field: SortField,
    direction: SortDirection,
) -> Vec<&'a FileRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ord = match field {
            SortField::Name => a
                .original_name()
                .to_lowercase()
                .cmp(&b.original_name().to_lowercase()),
            SortField::Size => a.size().cmp(&b.size()),
            SortField::Date => a.created_at().cmp(&b.created_at()),
            SortField::Type => a.mime_type().cmp(b.mime_type()),
        };
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    sorted
}
