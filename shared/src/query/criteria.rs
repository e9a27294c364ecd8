use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selected filter constraints for a list page.
///
/// Text keys use the empty string for "unset", numeric keys use `None`.
/// The default value is the no-op filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub search_query: String,
    pub country: String,
    pub level: String,
    pub gender: String,
    pub position: String,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
    /// Attribute key for the threshold filter, e.g. "speed"
    pub attribute: String,
    /// Minimum attribute value; 0 when unset
    pub attribute_min_value: Option<f64>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        count_active_filters(self) == 0
    }

    /// Resets every key in place.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_age_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.age_min = min;
        self.age_max = max;
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, min_value: Option<f64>) -> Self {
        self.attribute = key.into();
        self.attribute_min_value = min_value;
        self
    }
}

fn is_set(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Number of keys holding a non-empty value.
///
/// Each key counts once; `age_min` and `age_max` are two separate keys.
pub fn count_active_filters(criteria: &FilterCriteria) -> usize {
    [
        is_set(&criteria.search_query),
        is_set(&criteria.country),
        is_set(&criteria.level),
        is_set(&criteria.gender),
        is_set(&criteria.position),
        criteria.age_min.is_some(),
        criteria.age_max.is_some(),
        is_set(&criteria.attribute),
        criteria.attribute_min_value.is_some(),
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

/// Returns the all-unset criteria.
pub fn clear_filters(_criteria: &FilterCriteria) -> FilterCriteria {
    FilterCriteria::default()
}

/// Ordering applied after filtering. Exactly one is active per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortSpec {
    #[default]
    #[serde(alias = "newest")]
    Recent,
    Oldest,
    MostViewed,
    HighestPerformer,
    NameAsc,
    NameDesc,
}

impl SortSpec {
    pub const ALL: [SortSpec; 6] = [
        SortSpec::Recent,
        SortSpec::Oldest,
        SortSpec::MostViewed,
        SortSpec::HighestPerformer,
        SortSpec::NameAsc,
        SortSpec::NameDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortSpec::Recent => "recent",
            SortSpec::Oldest => "oldest",
            SortSpec::MostViewed => "mostViewed",
            SortSpec::HighestPerformer => "highestPerformer",
            SortSpec::NameAsc => "nameAsc",
            SortSpec::NameDesc => "nameDesc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortSpec::Recent => "Most recent",
            SortSpec::Oldest => "Oldest first",
            SortSpec::MostViewed => "Most viewed",
            SortSpec::HighestPerformer => "Highest performer",
            SortSpec::NameAsc => "Name (A-Z)",
            SortSpec::NameDesc => "Name (Z-A)",
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" | "newest" => Ok(SortSpec::Recent),
            "oldest" => Ok(SortSpec::Oldest),
            "mostViewed" => Ok(SortSpec::MostViewed),
            "highestPerformer" => Ok(SortSpec::HighestPerformer),
            "nameAsc" => Ok(SortSpec::NameAsc),
            "nameDesc" => Ok(SortSpec::NameDesc),
            _ => Err(format!("Unknown sort option: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_default_criteria_is_empty() {
        assert!(FilterCriteria::default().is_empty());
        assert_eq!(count_active_filters(&FilterCriteria::default()), 0);
    }

    #[test]
    fn test_count_counts_each_key_once() {
        let criteria = FilterCriteria::default()
            .with_search("alpha")
            .with_country("France")
            .with_age_range(Some(18), Some(25));
        assert_eq!(count_active_filters(&criteria), 4);

        let criteria = criteria.with_attribute("speed", None);
        assert_eq!(count_active_filters(&criteria), 5);
    }

    #[test]
    fn test_whitespace_only_is_unset() {
        let criteria = FilterCriteria::default().with_search("   ");
        assert_eq!(count_active_filters(&criteria), 0);
    }

    #[test]
    fn test_clear_resets_everything_at_once() {
        let mut criteria = FilterCriteria::default()
            .with_level("Academy")
            .with_gender("Female")
            .with_position("ST")
            .with_attribute("speed", Some(70.0));
        assert_eq!(clear_filters(&criteria), FilterCriteria::default());
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test_case("recent", SortSpec::Recent)]
    #[test_case("newest", SortSpec::Recent)]
    #[test_case("oldest", SortSpec::Oldest)]
    #[test_case("mostViewed", SortSpec::MostViewed)]
    #[test_case("highestPerformer", SortSpec::HighestPerformer)]
    #[test_case("nameDesc", SortSpec::NameDesc)]
    fn test_sort_spec_parses(tag: &str, expected: SortSpec) {
        assert_eq!(tag.parse::<SortSpec>().unwrap(), expected);
    }

    #[test]
    fn test_sort_spec_rejects_unknown() {
        assert!("popular".parse::<SortSpec>().is_err());
        for spec in SortSpec::ALL {
            assert_eq!(spec.as_str().parse::<SortSpec>().unwrap(), spec);
        }
    }

    #[test]
    fn test_criteria_deserializes_partial_json() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"searchQuery":"alpha","ageMin":18}"#).unwrap();
        assert_eq!(criteria.search_query, "alpha");
        assert_eq!(criteria.age_min, Some(18));
        assert_eq!(criteria.age_max, None);
    }
}
