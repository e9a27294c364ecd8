//! Shared lookup tables for filter dropdowns and form validation.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const COUNTRIES: &[&str] = &[
    "Algeria",
    "Argentina",
    "Australia",
    "Austria",
    "Belgium",
    "Brazil",
    "Cameroon",
    "Canada",
    "Chile",
    "Colombia",
    "Croatia",
    "Czech Republic",
    "Denmark",
    "Ecuador",
    "Egypt",
    "England",
    "France",
    "Germany",
    "Ghana",
    "Greece",
    "Hungary",
    "Iran",
    "Ireland",
    "Italy",
    "Ivory Coast",
    "Japan",
    "Mexico",
    "Morocco",
    "Netherlands",
    "Nigeria",
    "Norway",
    "Paraguay",
    "Peru",
    "Poland",
    "Portugal",
    "Qatar",
    "Saudi Arabia",
    "Scotland",
    "Senegal",
    "Serbia",
    "South Korea",
    "Spain",
    "Sweden",
    "Switzerland",
    "Tunisia",
    "Turkey",
    "Ukraine",
    "United States",
    "Uruguay",
    "Wales",
];

/// Position codes with their display labels, in pitch order.
pub const POSITIONS: &[(&str, &str)] = &[
    ("GK", "Goalkeeper"),
    ("RB", "Right Back"),
    ("CB", "Centre Back"),
    ("LB", "Left Back"),
    ("RWB", "Right Wing Back"),
    ("LWB", "Left Wing Back"),
    ("CDM", "Defensive Midfielder"),
    ("CM", "Central Midfielder"),
    ("CAM", "Attacking Midfielder"),
    ("RM", "Right Midfielder"),
    ("LM", "Left Midfielder"),
    ("RW", "Right Winger"),
    ("LW", "Left Winger"),
    ("CF", "Centre Forward"),
    ("ST", "Striker"),
];

pub const CLUB_LEVELS: &[&str] = &[
    "Professional",
    "Semi-Professional",
    "Amateur",
    "Academy",
    "Youth",
];

pub const GENDERS: &[&str] = &["Male", "Female", "Mixed"];

static COUNTRY_INDEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    COUNTRIES
        .iter()
        .map(|country| (country.to_lowercase(), *country))
        .collect()
});

/// Returns the canonical spelling of a known country, ignoring case.
pub fn canonical_country(name: &str) -> Option<&'static str> {
    COUNTRY_INDEX.get(&name.trim().to_lowercase()).copied()
}

pub fn is_valid_position(code: &str) -> bool {
    POSITIONS.iter().any(|(c, _)| *c == code)
}

pub fn position_label(code: &str) -> Option<&'static str> {
    POSITIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

pub fn allowed_positions() -> String {
    POSITIONS
        .iter()
        .map(|(code, _)| *code)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn is_valid_level(level: &str) -> bool {
    CLUB_LEVELS.contains(&level)
}

pub fn is_valid_gender(gender: &str) -> bool {
    GENDERS.contains(&gender)
}
