use crate::models::listable::Listable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A football club as returned by the clubs endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    #[serde(alias = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    /// Competitive level, e.g. "Professional" or "Academy"
    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub founded_year: Option<i32>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub views: Option<u64>,

    #[serde(default)]
    pub total_matches: Option<u32>,
}

impl Listable for Club {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn search_fields(&self) -> Vec<&str> {
        [
            Some(self.name.as_str()),
            self.country.as_deref(),
            self.level.as_deref(),
            self.city.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn secondary_timestamp(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn views(&self) -> Option<u64> {
        self.views
    }

    fn total_matches(&self) -> Option<u32> {
        self.total_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_club_decodes_with_missing_optionals() {
        let club: Club = serde_json::from_str(r#"{"_id":"c1","name":"FC Alpha"}"#).unwrap();
        assert_eq!(club.id, "c1");
        assert_eq!(club.country, None);
        assert_eq!(club.search_fields(), vec!["FC Alpha"]);
    }

    #[test]
    fn test_club_decodes_camel_case_fields() {
        let club: Club = serde_json::from_str(concat!(
            r#"{"id":"c2","name":"Beta United","country":"Spain","#,
            r#""createdAt":"2024-03-01T10:00:00Z","totalMatches":12,"views":40}"#,
        ))
        .unwrap();
        assert_eq!(club.total_matches, Some(12));
        assert_eq!(club.views(), Some(40));
        assert!(club.created_at().is_some());
    }
}
