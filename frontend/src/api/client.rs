use crate::api::{api_url, clubs, matches, players};
use crate::config::Config;
use crate::credentials::CredentialStore;
use async_trait::async_trait;
use shared::{
    Club, CreateClubRequest, CreateMatchRequest, FootballMatch, Page, Result, ScoutingProfile,
    UpdatePlayerProfileRequest,
};
use std::rc::Rc;

/// Backend operations used by the pages. Every call returns an already
/// decoded value or a typed error.
#[async_trait(?Send)]
pub trait ScoutApi {
    async fn list_clubs(&self) -> Result<Vec<Club>>;
    async fn list_matches(&self, page: u32, limit: u32) -> Result<Page<FootballMatch>>;
    async fn list_profiles(&self) -> Result<Vec<ScoutingProfile>>;

    async fn get_club(&self, id: &str) -> Result<Club>;
    async fn get_match(&self, id: &str) -> Result<FootballMatch>;
    async fn get_profile(&self, id: &str) -> Result<ScoutingProfile>;

    async fn create_club(&self, club: &CreateClubRequest) -> Result<Club>;
    async fn create_match(&self, submission: &CreateMatchRequest) -> Result<FootballMatch>;
    async fn update_player_profile(
        &self,
        id: &str,
        update: &UpdatePlayerProfileRequest,
    ) -> Result<ScoutingProfile>;
}

/// `ScoutApi` over `fetch`, with the credential store injected at construction.
#[derive(Clone)]
pub struct HttpScoutApi {
    base_url: String,
    store: Rc<dyn CredentialStore>,
}

impl HttpScoutApi {
    pub fn new(store: Rc<dyn CredentialStore>) -> Self {
        Self::with_base_url(Config::api_base_url(), store)
    }

    pub fn with_base_url(base_url: impl Into<String>, store: Rc<dyn CredentialStore>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
        }
    }

    pub fn url(&self, path: &str) -> String {
        api_url(&self.base_url, path)
    }

    pub fn credentials(&self) -> &dyn CredentialStore {
        self.store.as_ref()
    }
}

#[async_trait(?Send)]
impl ScoutApi for HttpScoutApi {
    async fn list_clubs(&self) -> Result<Vec<Club>> {
        clubs::list_clubs(self).await
    }

    async fn list_matches(&self, page: u32, limit: u32) -> Result<Page<FootballMatch>> {
        matches::list_matches(self, page, limit).await
    }

    async fn list_profiles(&self) -> Result<Vec<ScoutingProfile>> {
        players::list_profiles(self).await
    }

    async fn get_club(&self, id: &str) -> Result<Club> {
        clubs::get_club(self, id).await
    }

    async fn get_match(&self, id: &str) -> Result<FootballMatch> {
        matches::get_match(self, id).await
    }

    async fn get_profile(&self, id: &str) -> Result<ScoutingProfile> {
        players::get_profile(self, id).await
    }

    async fn create_club(&self, club: &CreateClubRequest) -> Result<Club> {
        clubs::create_club(self, club).await
    }

    async fn create_match(&self, submission: &CreateMatchRequest) -> Result<FootballMatch> {
        matches::create_match(self, submission).await
    }

    async fn update_player_profile(
        &self,
        id: &str,
        update: &UpdatePlayerProfileRequest,
    ) -> Result<ScoutingProfile> {
        players::update_player_profile(self, id, update).await
    }
}
