//! Permissive duration-string parsing.
//!
//! Catalog duration strings are an integer magnitude followed by a unit
//! word, e.g. `"45s"`, `"30 sec"`, `"2 min"`. Anything that does not fit
//! the pattern, including a missing string, falls back to 30 seconds:
//! malformed catalog data must never fail a session.

/// Fallback step duration in seconds.
pub const DEFAULT_STEP_SECS: u32 = 30;

/// Parse a duration string into seconds.
///
/// Units starting with `s` are seconds, units starting with `m` are
/// minutes. Unparseable or absent input yields [`DEFAULT_STEP_SECS`].
pub fn parse_duration_secs(input: Option<&str>) -> u32 {
    let Some(s) = input else {
        return DEFAULT_STEP_SECS;
    };
    let s = s.trim();
    let digits_end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    let Ok(magnitude) = s[..digits_end].parse::<u32>() else {
        return DEFAULT_STEP_SECS;
    };
    let unit = s[digits_end..].trim_start();
    match unit.chars().next() {
        Some('s') | Some('S') => magnitude,
        Some('m') | Some('M') => magnitude.saturating_mul(60),
        _ => DEFAULT_STEP_SECS,
    }
}
