use crate::models::listable::Listable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A scouted player's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScoutingProfile {
    #[serde(alias = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub country: Option<String>,

    /// Position code, see `reference::POSITIONS`
    #[serde(default)]
    pub position: Option<String>,

    #[serde(default)]
    pub age: Option<u32>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub current_club: Option<String>,

    #[serde(default)]
    pub scout_score: Option<f64>,

    /// Rated attributes such as speed or shooting, usually on a 0-100 scale
    #[serde(default)]
    pub attributes: Option<BTreeMap<String, f64>>,

    #[serde(default)]
    pub total_matches: Option<u32>,

    #[serde(default)]
    pub views: Option<u64>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Listable for ScoutingProfile {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn search_fields(&self) -> Vec<&str> {
        [
            Some(self.name.as_str()),
            self.country.as_deref(),
            self.position.as_deref(),
            self.bio.as_deref(),
            self.current_club.as_deref(),
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

    fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    fn age(&self) -> Option<u32> {
        self.age
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

    fn scout_score(&self) -> Option<f64> {
        self.scout_score
    }

    fn attribute(&self, key: &str) -> Option<f64> {
        self.attributes.as_ref()?.get(key).copied()
    }

    fn attribute_values(&self) -> Vec<f64> {
        self.attributes
            .as_ref()
            .map(|attrs| attrs.values().copied().filter(|v| v.is_finite()).collect())
            .unwrap_or_default()
    }

    fn total_matches(&self) -> Option<u32> {
        self.total_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_attribute_lookup() {
        let profile: ScoutingProfile = serde_json::from_str(
            r#"{"id":"p1","name":"X","attributes":{"speed":80,"shooting":60.5}}"#,
        )
        .unwrap();
        assert_eq!(profile.attribute("speed"), Some(80.0));
        assert_eq!(profile.attribute("passing"), None);
        assert_eq!(profile.attribute_values(), vec![60.5, 80.0]);
    }

    #[test]
    fn test_profile_without_attributes() {
        let profile = ScoutingProfile {
            name: "Y".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.attribute("speed"), None);
        assert!(profile.attribute_values().is_empty());
        assert_eq!(profile.search_fields(), vec!["Y"]);
    }
}
