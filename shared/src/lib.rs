pub mod models {
    pub mod club;
    pub mod football_match;
    pub mod listable;
    pub mod scouting;
}

pub mod dto {
    pub mod club;
    pub mod common;
    pub mod football_match;
    pub mod player;
}

pub mod error;
pub mod query;
pub mod reference;
pub mod transforms;
pub mod wizard;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{
    club::Club,
    football_match::{FootballMatch, MatchStatus},
    listable::Listable,
    scouting::ScoutingProfile,
};

// Re-export DTOs
pub use dto::{
    club::CreateClubRequest,
    common::{decode_envelope, ApiEnvelope, ApiStatus, Page, Pagination},
    football_match::{CreateMatchRequest, LineupPlayerDto},
    player::UpdatePlayerProfileRequest,
};

pub use query::{
    clear_filters, compute_view, count_active_filters, filter, sort, view_state, FilterCriteria,
    SortSpec, ViewState,
};
pub use wizard::{
    Advance, ClubRegistrationForm, MatchSubmissionForm, StepErrors, WizardState, Workflow,
};
