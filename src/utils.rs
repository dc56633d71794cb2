/// Upstream bills a fixed 102 quota units per ingested video: one search,
/// one details fetch, and the amortized channel lookup.
pub const QUOTA_COST_PER_VIDEO: u64 = 102;

/// Parse an ISO-8601 duration of the `PT[nH][nM][nS]` form into total whole
/// seconds. Lenient: inputs without a `PT` prefix, or with none of the three
/// components, parse as 0 rather than failing. Days and fractional seconds
/// are not part of the upstream format and are not supported.
pub fn parse_duration_seconds(duration: &str) -> u64 {
    let Some(rest) = duration.strip_prefix("PT") else {
        return 0;
    };

    let mut total = 0u64;
    let mut current = String::new();

    for ch in rest.chars() {
        if ch.is_ascii_digit() {
            current.push(ch);
        } else {
            if let Ok(value) = current.parse::<u64>() {
                match ch {
                    'H' => total += value * 3600,
                    'M' => total += value * 60,
                    'S' => total += value,
                    _ => {}
                }
            }
            current.clear();
        }
    }

    total
}

pub fn quota_cost(video_count: u64) -> u64 {
    video_count * QUOTA_COST_PER_VIDEO
}
