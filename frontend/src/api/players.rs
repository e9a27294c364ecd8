use crate::api::id_segment;
use crate::api::utils::{authenticated_get, authenticated_put, fetch_data, network_error};
use crate::api::HttpScoutApi;
use log::debug;
use shared::{Result, ScoutingProfile, SharedError, UpdatePlayerProfileRequest};

pub async fn list_profiles(api: &HttpScoutApi) -> Result<Vec<ScoutingProfile>> {
    let request = authenticated_get(&api.url("/api/scouting/profiles"), api.credentials())
        .build()
        .map_err(network_error)?;
    let profiles: Vec<ScoutingProfile> = fetch_data(request, api.credentials()).await?;
    debug!("Fetched {} scouting profiles", profiles.len());
    Ok(profiles)
}

pub async fn get_profile(api: &HttpScoutApi, id: &str) -> Result<ScoutingProfile> {
    let url = api.url(&format!("/api/scouting/profiles/{}", id_segment(id)));
    let request = authenticated_get(&url, api.credentials())
        .build()
        .map_err(network_error)?;
    fetch_data(request, api.credentials()).await
}

/// Validates locally before sending; an invalid or empty update never hits
/// the network.
pub async fn update_player_profile(
    api: &HttpScoutApi,
    id: &str,
    update: &UpdatePlayerProfileRequest,
) -> Result<ScoutingProfile> {
    if update.is_empty() {
        return Err(SharedError::Validation("Nothing to update".to_string()));
    }
    update.validate_fields()?;

    let url = api.url(&format!("/api/players/{}/profile", id_segment(id)));
    debug!("Updating player profile {}", id);
    let request = authenticated_put(&url, api.credentials())
        .json(update)
        .map_err(network_error)?;
    fetch_data(request, api.credentials()).await
}
