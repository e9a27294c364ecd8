use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fully validated lineup entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupPlayerDto {
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: u8,
    pub position: String,
}

/// Body of `POST /matches`, assembled from the submission wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub home_team: String,
    pub away_team: String,
    pub match_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition: Option<String>,
    pub video_url: String,
    pub video_id: String,
    pub starters: Vec<LineupPlayerDto>,
    pub substitutes: Vec<LineupPlayerDto>,
}
