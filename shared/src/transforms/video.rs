use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YOUTUBE_ID_REGEX: Regex = Regex::new(concat!(
        r"^(?:https?://)?(?:www\.|m\.)?",
        r"(?:youtube(?:-nocookie)?\.com/(?:watch\?(?:.*&)?v=|embed/|shorts/|v/|live/)|youtu\.be/)",
        r"([A-Za-z0-9_-]{11})(?:[?&#/]|$)",
    ))
    .unwrap();
}

/// Extracts the 11 character video id from a YouTube link. The host must be
/// a YouTube domain; bare ids are not accepted.
pub fn extract_youtube_id(url: &str) -> Option<String> {
    YOUTUBE_ID_REGEX
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}

/// Embed URL starting playback at `start_seconds`.
pub fn youtube_embed_url_at(video_id: &str, start_seconds: u32) -> String {
    format!("https://www.youtube.com/embed/{}?start={}", video_id, start_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("https://www.youtube.com/watch?v=dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
    #[test_case("https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=42", Some("dQw4w9WgXcQ"))]
    #[test_case("https://youtu.be/dQw4w9WgXcQ?t=10", Some("dQw4w9WgXcQ"))]
    #[test_case("https://www.youtube.com/embed/dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
    #[test_case("https://www.youtube.com/shorts/dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
    #[test_case("https://m.youtube.com/v/dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
    #[test_case("youtube.com/watch?v=dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
    #[test_case("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
    #[test_case("dQw4w9WgXcQ", None)]
    #[test_case("my_team_vid", None)]
    #[test_case("https://notyoutube.com/watch?v=dQw4w9WgXcQ", None)]
    #[test_case("https://evil.example.com/youtu.be/dQw4w9WgXcQ", None)]
    #[test_case("https://vimeo.com/123456789", None)]
    #[test_case("https://www.youtube.com/watch?v=short", None)]
    #[test_case("", None)]
    fn test_extract_youtube_id(url: &str, expected: Option<&str>) {
        assert_eq!(extract_youtube_id(url).as_deref(), expected);
    }

    #[test]
    fn test_embed_urls() {
        assert_eq!(
            youtube_embed_url_at("dQw4w9WgXcQ", 95),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?start=95"
        );
        assert!(youtube_embed_url("dQw4w9WgXcQ").ends_with("/embed/dQw4w9WgXcQ"));
    }
}
