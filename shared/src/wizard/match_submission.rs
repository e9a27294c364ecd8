use crate::dto::football_match::{CreateMatchRequest, LineupPlayerDto};
use crate::error::{Result, SharedError};
use crate::reference;
use crate::transforms::video::extract_youtube_id;
use crate::wizard::rules::{
    invalid_position_message, not_blank, parse_date, parse_jersey_number, validate_match_date,
    validate_youtube_url,
};
use crate::wizard::{StepErrors, Workflow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

pub const MAX_STARTERS: usize = 11;
pub const MAX_SUBSTITUTES: usize = 12;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetailsStep {
    #[validate(custom(function = "not_blank", message = "Home team is required"))]
    #[validate(length(max = 100, message = "Home team must be at most 100 characters"))]
    pub home_team: String,

    #[validate(custom(function = "not_blank", message = "Away team is required"))]
    #[validate(length(max = 100, message = "Away team must be at most 100 characters"))]
    pub away_team: String,

    /// `YYYY-MM-DD`
    #[validate(custom = "validate_match_date")]
    pub match_date: String,

    #[validate(length(max = 100, message = "Competition must be at most 100 characters"))]
    pub competition: String,

    #[validate(custom = "validate_youtube_url")]
    pub video_url: String,
}

/// One lineup row as typed into the form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntry {
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: String,
    pub position: String,
}

impl PlayerEntry {
    pub fn new(first_name: &str, last_name: &str, jersey_number: &str, position: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            jersey_number: jersey_number.to_string(),
            position: position.to_string(),
        }
    }

    fn parts(&self) -> [(&'static str, &str); 4] {
        [
            ("first name", self.first_name.trim()),
            ("last name", self.last_name.trim()),
            ("jersey number", self.jersey_number.trim()),
            ("position", self.position.trim()),
        ]
    }

    pub fn is_blank(&self) -> bool {
        self.parts().iter().all(|(_, value)| value.is_empty())
    }

    fn missing(&self) -> Vec<&'static str> {
        self.parts()
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    fn to_dto(&self) -> Option<LineupPlayerDto> {
        Some(LineupPlayerDto {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            jersey_number: parse_jersey_number(&self.jersey_number)?,
            position: self.position.trim().to_string(),
        })
    }
}

/// Checks one row: completeness first, then the jersey number and position.
fn check_entry(label: &str, entry: &PlayerEntry, errors: &mut StepErrors) {
    let missing = entry.missing();
    if !missing.is_empty() {
        errors.push(format!("{} is incomplete: missing {}", label, missing.join(", ")));
    }

    let jersey = entry.jersey_number.trim();
    if !jersey.is_empty() && parse_jersey_number(jersey).is_none() {
        errors.push(format!(
            "{}: jersey number must be a whole number between 1 and 99",
            label
        ));
    }

    let position = entry.position.trim();
    if !position.is_empty() && !reference::is_valid_position(position) {
        errors.push(format!("{}: {}", label, invalid_position_message(position)));
    }
}

fn check_duplicate_jerseys<'a, I>(entries: I, errors: &mut StepErrors)
where
    I: IntoIterator<Item = &'a PlayerEntry>,
{
    let mut seen: BTreeMap<u8, usize> = BTreeMap::new();
    for entry in entries {
        if let Some(number) = parse_jersey_number(&entry.jersey_number) {
            *seen.entry(number).or_default() += 1;
        }
    }
    for (number, count) in seen {
        if count > 1 {
            errors.push(format!("Jersey number {} is used more than once", number));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LineupStep {
    #[validate(length(min = 1, max = 11, message = "Add between 1 and 11 starting players"))]
    pub starters: Vec<PlayerEntry>,
}

/// Optional bench rows. A row is a coupled group: blank rows are skipped,
/// a row with any field filled needs all four.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutesStep {
    #[validate(length(max = 12, message = "At most 12 substitutes can be listed"))]
    pub substitutes: Vec<PlayerEntry>,
}

impl MatchDetailsStep {
    fn check(&self) -> StepErrors {
        let mut errors = StepErrors::new();
        errors.absorb(self.validate());

        let home = self.home_team.trim();
        let away = self.away_team.trim();
        if !home.is_empty() && home.eq_ignore_ascii_case(away) {
            errors.push("Home and away teams must be different");
        }
        errors
    }
}

impl LineupStep {
    fn check(&self) -> StepErrors {
        let mut errors = StepErrors::new();
        errors.absorb(self.validate());
        for (index, entry) in self.starters.iter().enumerate() {
            check_entry(&format!("Starter {}", index + 1), entry, &mut errors);
        }
        check_duplicate_jerseys(&self.starters, &mut errors);
        errors
    }
}

impl SubstitutesStep {
    fn check(&self) -> StepErrors {
        let mut errors = StepErrors::new();
        errors.absorb(self.validate());
        for (index, entry) in self.substitutes.iter().enumerate() {
            if entry.is_blank() {
                continue;
            }
            check_entry(&format!("Substitute {}", index + 1), entry, &mut errors);
        }
        check_duplicate_jerseys(
            self.substitutes.iter().filter(|entry| !entry.is_blank()),
            &mut errors,
        );
        errors
    }

    pub fn filled(&self) -> impl Iterator<Item = &PlayerEntry> {
        self.substitutes.iter().filter(|entry| !entry.is_blank())
    }
}

/// Three-step match submission: details, starting lineup, substitutes.
/// Leaving the substitutes step creates the match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSubmissionForm {
    pub details: MatchDetailsStep,
    pub lineup: LineupStep,
    pub substitutes: SubstitutesStep,
}

impl Workflow for MatchSubmissionForm {
    type Payload = CreateMatchRequest;

    fn step_count(&self) -> usize {
        3
    }

    fn step_title(&self, step: usize) -> &'static str {
        match step {
            1 => "Match details",
            2 => "Starting lineup",
            3 => "Substitutes",
            _ => "",
        }
    }

    fn validate_step(&self, step: usize) -> std::result::Result<(), StepErrors> {
        match step {
            1 => self.details.check(),
            2 => self.lineup.check(),
            3 => self.substitutes.check(),
            _ => StepErrors::new(),
        }
        .into_result()
    }

    fn submits_on(&self, step: usize) -> bool {
        step == 3
    }

    fn payload(&self) -> Result<CreateMatchRequest> {
        let details = &self.details;
        let match_date = parse_date(&details.match_date).ok_or_else(|| {
            SharedError::Validation("Match date must be in YYYY-MM-DD format".to_string())
        })?;
        let video_id = extract_youtube_id(&details.video_url).ok_or_else(|| {
            SharedError::Validation("Video link must be a valid YouTube URL".to_string())
        })?;

        let to_dtos = |entries: Vec<&PlayerEntry>| -> Result<Vec<LineupPlayerDto>> {
            entries
                .into_iter()
                .map(|entry| {
                    entry.to_dto().ok_or_else(|| {
                        SharedError::Validation(format!(
                            "Invalid jersey number \"{}\"",
                            entry.jersey_number.trim()
                        ))
                    })
                })
                .collect()
        };

        let competition = details.competition.trim();
        Ok(CreateMatchRequest {
            home_team: details.home_team.trim().to_string(),
            away_team: details.away_team.trim().to_string(),
            match_date,
            competition: (!competition.is_empty()).then(|| competition.to_string()),
            video_url: details.video_url.trim().to_string(),
            video_id,
            starters: to_dtos(self.lineup.starters.iter().collect())?,
            substitutes: to_dtos(self.substitutes.filled().collect())?,
        })
    }
}
