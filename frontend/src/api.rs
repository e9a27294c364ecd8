pub mod client;
pub mod clubs;
pub mod matches;
pub mod players;
pub mod utils;

pub use client::{HttpScoutApi, ScoutApi};

/// Joins the configured base URL and an API path. An empty base keeps the
/// URL relative.
pub fn api_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}

/// Path segment for an entity id; ids may contain `/`.
pub fn id_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("", "/api/clubs"), "/api/clubs");
        assert_eq!(
            api_url("https://scout.example.com", "/api/clubs"),
            "https://scout.example.com/api/clubs"
        );
    }

    #[test]
    fn test_id_segment_escapes_slashes() {
        assert_eq!(id_segment("club/12"), "club%2F12");
    }
}
