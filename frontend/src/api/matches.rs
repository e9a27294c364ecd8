use crate::api::id_segment;
use crate::api::utils::{
    authenticated_get, authenticated_post, fetch_data, fetch_page, network_error, query_string,
};
use crate::api::HttpScoutApi;
use log::debug;
use shared::{CreateMatchRequest, FootballMatch, Page, Result};

/// One page of the match list; pages are 1-based.
pub async fn list_matches(
    api: &HttpScoutApi,
    page: u32,
    limit: u32,
) -> Result<Page<FootballMatch>> {
    let qs = query_string(&[("page", page.to_string()), ("limit", limit.to_string())]);
    let url = format!("{}{}", api.url("/api/matches"), qs);
    let request = authenticated_get(&url, api.credentials())
        .build()
        .map_err(network_error)?;
    let page = fetch_page::<FootballMatch>(request, api.credentials()).await?;
    debug!(
        "Fetched match page {}/{} ({} items)",
        page.pagination.page,
        page.pagination.total_pages,
        page.items.len()
    );
    Ok(page)
}

pub async fn get_match(api: &HttpScoutApi, id: &str) -> Result<FootballMatch> {
    let url = api.url(&format!("/api/matches/{}", id_segment(id)));
    let request = authenticated_get(&url, api.credentials())
        .build()
        .map_err(network_error)?;
    fetch_data(request, api.credentials()).await
}

pub async fn create_match(
    api: &HttpScoutApi,
    submission: &CreateMatchRequest,
) -> Result<FootballMatch> {
    debug!(
        "Submitting match {} vs {} ({} starters, {} substitutes)",
        submission.home_team,
        submission.away_team,
        submission.starters.len(),
        submission.substitutes.len()
    );
    let request = authenticated_post(&api.url("/api/matches"), api.credentials())
        .json(submission)
        .map_err(network_error)?;
    fetch_data(request, api.credentials()).await
}
