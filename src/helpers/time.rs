//! Timestamp helpers
//!
//! Highlights, transcript lines and chat messages refer to the lecture with
//! `m:ss` strings. These are parsed into whole seconds for seeking and
//! formatted back for display.

/// Parse a `m:ss` (or `h:mm:ss`) timestamp into seconds.
///
/// Returns `None` for empty input, non-numeric parts, or seconds/minutes
/// fields outside `0..60` after the leading part.
pub fn parse_timestamp(input: &str) -> Option<u32> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let mut total: u32 = 0;
    for (index, part) in input.split(':').enumerate() {
        let value: u32 = part.parse().ok()?;
        if index > 0 && value >= 60 {
            return None;
        }
        total = total.checked_mul(60)?.checked_add(value)?;
    }
    Some(total)
}

/// Format seconds as `m:ss`, e.g. `135` -> `2:15`
pub fn format_timestamp(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minutes_and_seconds() {
        assert_eq!(parse_timestamp("0:00"), Some(0));
        assert_eq!(parse_timestamp("2:15"), Some(135));
        assert_eq!(parse_timestamp("15:10"), Some(910));
        assert_eq!(parse_timestamp("1:00:05"), Some(3605));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("Current"), None);
        assert_eq!(parse_timestamp("3:75"), None);
        assert_eq!(parse_timestamp("3:-1"), None);
    }

    #[test]
    fn formats_with_padded_seconds() {
        assert_eq!(format_timestamp(0), "0:00");
        assert_eq!(format_timestamp(330), "5:30");
        assert_eq!(format_timestamp(1200), "20:00");
    }
}
