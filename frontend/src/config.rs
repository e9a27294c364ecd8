pub struct Config;

impl Config {
    /// Base URL prepended to API paths.
    ///
    /// Read at compile time from `SCOUT_API_BASE_URL`. Empty means relative
    /// URLs, which works behind both the dev-server proxy and nginx.
    pub fn api_base_url() -> String {
        option_env!("SCOUT_API_BASE_URL")
            .unwrap_or("")
            .trim_end_matches('/')
            .to_string()
    }

    /// Page size used by paginated list endpoints
    pub fn default_page_size() -> u32 {
        20
    }

    /// LocalStorage key holding the bearer token
    pub fn token_storage_key() -> &'static str {
        "scout_auth_token"
    }

    /// How long a toast stays on screen, in milliseconds
    pub fn toast_duration_ms() -> u32 {
        5000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Config::default_page_size(), 20);
        assert_eq!(Config::token_storage_key(), "scout_auth_token");
        assert!(!Config::api_base_url().ends_with('/'));
    }
}
