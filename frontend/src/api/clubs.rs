use crate::api::id_segment;
use crate::api::utils::{authenticated_get, authenticated_post, fetch_data, network_error};
use crate::api::HttpScoutApi;
use log::debug;
use shared::{Club, CreateClubRequest, Result};

pub async fn list_clubs(api: &HttpScoutApi) -> Result<Vec<Club>> {
    let request = authenticated_get(&api.url("/api/clubs"), api.credentials())
        .build()
        .map_err(network_error)?;
    let clubs: Vec<Club> = fetch_data(request, api.credentials()).await?;
    debug!("Fetched {} clubs", clubs.len());
    Ok(clubs)
}

pub async fn get_club(api: &HttpScoutApi, id: &str) -> Result<Club> {
    let url = api.url(&format!("/api/clubs/{}", id_segment(id)));
    let request = authenticated_get(&url, api.credentials())
        .build()
        .map_err(network_error)?;
    fetch_data(request, api.credentials()).await
}

pub async fn create_club(api: &HttpScoutApi, club: &CreateClubRequest) -> Result<Club> {
    debug!("Creating club {}", club.name);
    let request = authenticated_post(&api.url("/api/clubs"), api.credentials())
        .json(club)
        .map_err(network_error)?;
    fetch_data(request, api.credentials()).await
}
