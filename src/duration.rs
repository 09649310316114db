//! Codec for the `H:MM:SS` duration strings carried by the activity log.
//!
//! Hours render unpadded while minutes and seconds are always two digits, so
//! 4994 seconds encodes as `1:23:14` and never `01:23:14`. Downstream
//! consumers depend on that exact width asymmetry; do not normalize hours to
//! two digits.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::RollupError;

static DURATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+):(\d+):(\d+)$").expect("duration pattern"));

/// Parses an `H:MM:SS`-style duration into total seconds. A string missing
/// any of the three components fails fast rather than being read as zero.
pub fn parse_duration(raw: &str) -> Result<i64, RollupError> {
    let captures = DURATION_PATTERN.captures(raw).ok_or_else(|| {
        RollupError::Format(format!("Malformed duration '{raw}': expected H:MM:SS"))
    })?;
    let component = |idx: usize| {
        captures[idx].parse::<i64>().map_err(|_| {
            RollupError::Format(format!("Duration component out of range in '{raw}'"))
        })
    };
    Ok(component(1)? * 3600 + component(2)? * 60 + component(3)?)
}

/// Renders total seconds back to text with unpadded hours and two-digit
/// minutes and seconds.
pub fn encode_duration(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_totals_components() {
        assert_eq!(parse_duration("1:23:14").unwrap(), 4994);
        assert_eq!(parse_duration("0:13:04").unwrap(), 784);
        assert_eq!(parse_duration("3:01:47").unwrap(), 10907);
        assert_eq!(parse_duration("12:00:00").unwrap(), 43200);
    }

    #[test]
    fn parse_duration_rejects_malformed_strings() {
        for raw in ["abc", "", "1:23", "1:23:14:05", "1:2x:14", ":13:04"] {
            let err = parse_duration(raw).unwrap_err();
            assert!(matches!(err, RollupError::Format(_)), "accepted {raw:?}");
        }
    }

    #[test]
    fn encode_duration_pads_minutes_and_seconds_only() {
        assert_eq!(encode_duration(4994), "1:23:14");
        assert_eq!(encode_duration(784), "0:13:04");
        assert_eq!(encode_duration(5778), "1:36:18");
        assert_eq!(encode_duration(0), "0:00:00");
        assert_eq!(encode_duration(13 * 3600 + 5), "13:00:05");
    }

    #[test]
    fn well_formed_durations_round_trip() {
        for raw in ["1:23:14", "0:13:04", "3:01:47", "1:56:34", "26:00:59"] {
            assert_eq!(encode_duration(parse_duration(raw).unwrap()), raw);
        }
    }
}
