//! Remote file metadata as returned by the storage API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::format::{format_date, format_size};

/// One file's metadata, deserialized verbatim from the list endpoint.
///
/// The server identifies records by `_id`; some responses also carry an
/// `id` field. Both are kept so deletes can be reconciled against either.
///
/// # Examples
///
/// ```
/// use pstore_core::FileRecord;
///
/// let json = r#"{"_id":"a1","originalName":"Report.pdf","size":1536,
///     "mimeType":"application/pdf","createdAt":"2026-10-18T07:05:00Z",
///     "url":"https://cdn.example/a1"}"#;
/// let record: FileRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.original_name(), "Report.pdf");
/// assert!(record.matches_id("a1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    id: Option<String>,
    #[serde(
        rename = "id",
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    alt_id: Option<String>,
    #[serde(rename = "originalName", default, deserialize_with = "null_as_default")]
    original_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    size: u64,
    #[serde(rename = "mimeType", default, deserialize_with = "null_as_default")]
    mime_type: String,
    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    url: String,
}

/// `null` decodes to the field's default instead of failing the listing.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts string or numeric ids.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// RFC 3339 strings or epoch milliseconds; anything else is `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    })
}

impl FileRecord {
    /// Builds a record directly, mainly for tests and fake servers.
    pub fn new(
        id: impl Into<String>,
        original_name: impl Into<String>,
        size: u64,
        mime_type: impl Into<String>,
        created_at: Option<DateTime<Utc>>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            alt_id: None,
            original_name: original_name.into(),
            size,
            mime_type: mime_type.into(),
            created_at,
            url: url.into(),
        }
    }

    /// Returns a copy carrying `alt_id` as its alternate key.
    #[must_use]
    pub fn with_alt_id(self, alt_id: impl Into<String>) -> Self {
        Self {
            alt_id: Some(alt_id.into()),
            ..self
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn alt_id(&self) -> Option<&str> {
        self.alt_id.as_deref()
    }

    /// The primary key, falling back to the alternate key.
    pub fn key(&self) -> Option<&str> {
        self.id().or_else(|| self.alt_id())
    }

    /// Returns `true` if either the primary or alternate key equals `id`.
    pub fn matches_id(&self, id: &str) -> bool {
        self.id() == Some(id) || self.alt_id() == Some(id)
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Projects the record into its display form.
    pub fn to_row(&self) -> FileRow {
        FileRow {
            id: self.key().unwrap_or_default().to_string(),
            name: self.original_name.clone(),
            size: format_size(self.size),
            url: self.url.clone(),
            mime_type: self.mime_type.clone(),
            date: self.created_at.map(format_date).unwrap_or_default(),
        }
    }
}

/// Display projection of a [`FileRecord`] with formatted size and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRow {
    pub id: String,
    pub name: String,
    pub size: String,
    pub url: String,
    pub mime_type: String,
    pub date: String,
}
