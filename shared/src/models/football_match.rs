use crate::models::listable::Listable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Pending,
    Processing,
    Analyzed,
    Failed,
}

/// A submitted match with its footage link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FootballMatch {
    #[serde(alias = "_id")]
    pub id: String,

    pub home_team: String,

    pub away_team: String,

    #[serde(default)]
    pub competition: Option<String>,

    #[serde(default)]
    pub venue: Option<String>,

    /// Kick-off time
    #[serde(default)]
    pub match_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub video_url: Option<String>,

    #[serde(default)]
    pub home_score: Option<u8>,

    #[serde(default)]
    pub away_score: Option<u8>,

    #[serde(default)]
    pub status: MatchStatus,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub views: Option<u64>,
}

impl FootballMatch {
    pub fn title(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }

    pub fn score_line(&self) -> Option<String> {
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => Some(format!("{} - {}", home, away)),
            _ => None,
        }
    }
}

impl Listable for FootballMatch {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(self.title())
    }

    fn search_fields(&self) -> Vec<&str> {
        [
            Some(self.home_team.as_str()),
            Some(self.away_team.as_str()),
            self.competition.as_deref(),
            self.venue.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn secondary_timestamp(&self) -> Option<DateTime<Utc>> {
        self.match_date
    }

    fn views(&self) -> Option<u64> {
        self.views
    }
}
