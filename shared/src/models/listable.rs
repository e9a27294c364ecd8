use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// The subset of a record the list query engine reads.
///
/// Every accessor besides `name` and `search_fields` is optional: a record
/// that does not carry a field reports `None` and the engine treats it as
/// absent rather than failing.
pub trait Listable {
    fn name(&self) -> Cow<'_, str>;

    /// Text fields matched by the free-text search, page-defined per record type.
    fn search_fields(&self) -> Vec<&str>;

    fn country(&self) -> Option<&str> {
        None
    }

    fn level(&self) -> Option<&str> {
        None
    }

    fn gender(&self) -> Option<&str> {
        None
    }

    fn position(&self) -> Option<&str> {
        None
    }

    fn age(&self) -> Option<u32> {
        None
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Used for date ordering when `created_at` is missing.
    fn secondary_timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn views(&self) -> Option<u64> {
        None
    }

    fn scout_score(&self) -> Option<f64> {
        None
    }

    fn attribute(&self, _key: &str) -> Option<f64> {
        None
    }

    fn attribute_values(&self) -> Vec<f64> {
        Vec::new()
    }

    fn total_matches(&self) -> Option<u32> {
        None
    }
}
