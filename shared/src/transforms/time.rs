/// Formats seconds as `m:ss`, or `h:mm:ss` from one hour up.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Parses `ss`, `mm:ss` or `h:mm:ss` into seconds.
///
/// Minutes and seconds after the leading component must be below 60.
pub fn parse_time_string(input: &str) -> Option<u32> {
    let parts: Vec<&str> = input.trim().split(':').collect();
    if parts.is_empty() || parts.len() > 3 {
        return None;
    }

    let mut values = Vec::with_capacity(parts.len());
    for part in &parts {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        values.push(part.parse::<u32>().ok()?);
    }

    if values.iter().skip(1).any(|v| *v >= 60) {
        return None;
    }

    values
        .iter()
        .try_fold(0u32, |acc, v| acc.checked_mul(60)?.checked_add(*v))
}
