//! Pure reshaping helpers for API payloads on their way to the screen.

pub mod pitch;
pub mod time;
pub mod video;

pub use pitch::{pass_heatmap, passes_in_window, zone_to_grid, GridCell, PassEvent, PassHeatmap};
pub use time::{format_duration, parse_time_string};
pub use video::{extract_youtube_id, youtube_embed_url, youtube_embed_url_at};
