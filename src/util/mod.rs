//! Small utility helpers for fuzzy ranking and time formatting.
//!
//! The functions in this module are intentionally lightweight and
//! dependency-free where possible to keep compile times down. They are
//! used by the selector UI and the logging layer.

/// What: Rank how well a skin label matches a query using fuzzy matching (fzf-style).
///
/// Inputs:
/// - `label`: Candidate text to match against (e.g. "User/Nord Dark")
/// - `query`: Query string typed into the filter line
/// - `matcher`: Reference to a `SkimMatcherV2` instance reused across calls
///
/// Output:
/// - `Some(score)` when the query matches (higher is better); `None` otherwise.
///
/// Details:
/// - An empty or whitespace-only query never matches; callers treat that as
///   "no filter" and keep the full candidate list.
#[must_use]
pub fn fuzzy_match_rank_with_matcher(
    label: &str,
    query: &str,
    matcher: &fuzzy_matcher::skim::SkimMatcherV2,
) -> Option<i64> {
    use fuzzy_matcher::FuzzyMatcher;

    if query.trim().is_empty() {
        return None;
    }

    matcher.fuzzy_match(label, query)
}

/// What: Convert an optional Unix timestamp (seconds) to a UTC date-time string.
///
/// Inputs:
/// - `ts`: Optional Unix timestamp in seconds since epoch.
///
/// Output:
/// - Returns `YYYY-MM-DD HH:MM:SS` (UTC), an empty string for `None`, or the
///   numeric string for negative timestamps.
///
/// Details:
/// - Simple loop-based conversion; leap seconds are not accounted for.
#[must_use]
pub fn ts_to_date(ts: Option<i64>) -> String {
    let Some(t) = ts else {
        return String::new();
    };
    if t < 0 {
        return t.to_string();
    }

    // Split into days and seconds-of-day
    let mut days = t / 86_400;
    let mut sod = t % 86_400; // 0..86399
    if sod < 0 {
        sod += 86_400;
        days -= 1;
    }

    let hour = u32::try_from(sod / 3600).unwrap_or(0);
    sod %= 3600;
    let minute = u32::try_from(sod / 60).unwrap_or(0);
    let second = u32::try_from(sod % 60).unwrap_or(0);

    // Convert days since 1970-01-01 to Y-M-D (UTC)
    let mut year: i32 = 1970;
    loop {
        let diy = i64::from(if is_leap(year) { 366 } else { 365 });
        if days >= diy {
            days -= diy;
            year += 1;
        } else {
            break;
        }
    }
    let leap = is_leap(year);
    let mut month: u32 = 1;
    let mdays = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    for &len in &mdays {
        if days >= i64::from(len) {
            days -= i64::from(len);
            month += 1;
        } else {
            break;
        }
    }
    let day = u32::try_from(days + 1).unwrap_or(1);

    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")
}

/// Leap year predicate for the proleptic Gregorian calendar.
const fn is_leap(y: i32) -> bool {
    (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ts_to_date_known_values() {
        assert_eq!(ts_to_date(None), "");
        assert_eq!(ts_to_date(Some(-1)), "-1");
        assert_eq!(ts_to_date(Some(0)), "1970-01-01 00:00:00");
        // 2000-02-29 00:00:00 UTC
        assert_eq!(ts_to_date(Some(951_782_400)), "2000-02-29 00:00:00");
    }

    #[test]
    fn fuzzy_rank_empty_query_never_matches() {
        let matcher = fuzzy_matcher::skim::SkimMatcherV2::default();
        assert!(fuzzy_match_rank_with_matcher("User/Nord", "", &matcher).is_none());
        assert!(fuzzy_match_rank_with_matcher("User/Nord", "  ", &matcher).is_none());
        assert!(fuzzy_match_rank_with_matcher("User/Nord", "nord", &matcher).is_some());
    }
}
