// src/core/sanitize.rs
//
// Text coming off the game pages: entity cleanup, whitespace folding, and the
// two numeric field shapes the setup forms accept (`\d+` and `\d+\.?\d*`).

use crate::error::{Error, Result};

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Comparison key for a scraped label: entities decoded, whitespace dropped,
/// ASCII lowercased. "Very&nbsp;low", "very low" and "VeryLow" share a key.
pub fn label_key(s: &str) -> String {
    normalize_entities(s)
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Whole-field match of `\d+`.
pub fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Whole-field match of `\d+\.?\d*`: digits, then at most one dot, then digits.
pub fn is_float(s: &str) -> bool {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    is_integer(int_part) && frac_part.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a required integer field. Surrounding whitespace is tolerated,
/// anything else that isn't `\d+` is rejected.
pub fn parse_int_field(field: &str, text: &str) -> Result<u32> {
    let t = text.trim();
    if !is_integer(t) {
        return Err(Error::invalid(format!("{field}: '{text}' is not a whole number")));
    }
    t.parse::<u32>()
        .map_err(|_| Error::invalid(format!("{field}: '{text}' is out of range")))
}

/// Parse a required decimal field (`\d+\.?\d*`).
pub fn parse_float_field(field: &str, text: &str) -> Result<f64> {
    let t = text.trim();
    if !is_float(t) {
        return Err(Error::invalid(format!("{field}: '{text}' is not a number")));
    }
    t.parse::<f64>()
        .map_err(|_| Error::invalid(format!("{field}: '{text}' is not a number")))
}

/// `parse_float_field` with an optional leading minus (temperatures, raw
/// wear readings).
pub fn parse_signed_float_field(field: &str, text: &str) -> Result<f64> {
    let t = text.trim();
    match t.strip_prefix('-') {
        Some(rest) => parse_float_field(field, rest).map(|v| -v),
        None => parse_float_field(field, t),
    }
}

/// `None` for absent or blank text, otherwise the same as `parse_int_field`.
pub fn parse_optional_int(field: &str, text: Option<&str>) -> Result<Option<u32>> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(t) => parse_int_field(field, t).map(Some),
    }
}

/// Lap time as shown in race analysis (`1:32.456`) or plain seconds (`92.456`).
pub fn parse_lap_time(field: &str, text: &str) -> Result<f64> {
    let t = text.trim();
    let seconds = match t.split_once(':') {
        Some((min, sec)) => {
            let min = parse_int_field(field, min)?;
            let sec = parse_float_field(field, sec)?;
            if sec >= 60.0 {
                return Err(Error::invalid(format!("{field}: '{text}' has more than 59 seconds")));
            }
            f64::from(min) * 60.0 + sec
        }
        None => parse_float_field(field, t)?,
    };
    if seconds <= 0.0 {
        return Err(Error::invalid(format!("{field}: lap time must be positive")));
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_pattern_is_whole_field() {
        assert!(is_integer("0"));
        assert!(is_integer("045"));
        assert!(!is_integer(""));
        assert!(!is_integer("4.5"));
        assert!(!is_integer("45abc"));
        assert!(!is_integer("-3"));
    }

    #[test]
    fn float_pattern_allows_trailing_dot() {
        assert!(is_float("12"));
        assert!(is_float("12."));
        assert!(is_float("12.75"));
        assert!(!is_float(".5"));
        assert!(!is_float("1.2.3"));
        assert!(!is_float("1e3"));
    }

    #[test]
    fn label_key_folds_scraped_spellings() {
        assert_eq!(label_key("Very&nbsp;low"), "verylow");
        assert_eq!(label_key("  Front   Wing "), "frontwing");
        assert_eq!(label_key("FWing"), "fwing");
    }

    #[test]
    fn parse_fields_trim_but_reject_noise() {
        assert_eq!(parse_int_field("laps", " 67 ").unwrap(), 67);
        assert!(parse_int_field("laps", "67 laps").unwrap_err().is_invalid_argument());
        assert_eq!(parse_float_field("wear", "12.5").unwrap(), 12.5);
        assert!(parse_float_field("wear", "12,5").is_err());
        assert_eq!(parse_optional_int("target", Some("  ")).unwrap(), None);
        assert_eq!(parse_optional_int("target", None).unwrap(), None);
    }

    #[test]
    fn signed_float_takes_one_minus() {
        assert_eq!(parse_signed_float_field("temp", " -4.5").unwrap(), -4.5);
        assert_eq!(parse_signed_float_field("temp", "7").unwrap(), 7.0);
        assert!(parse_signed_float_field("temp", "--4").is_err());
        assert!(parse_signed_float_field("temp", "- 4").is_err());
    }

    #[test]
    fn lap_time_accepts_both_shapes() {
        assert_eq!(parse_lap_time("lap", "92.5").unwrap(), 92.5);
        assert_eq!(parse_lap_time("lap", "1:32.5").unwrap(), 92.5);
        assert!(parse_lap_time("lap", "1:75").is_err());
        assert!(parse_lap_time("lap", "0").is_err());
        assert!(parse_lap_time("lap", "fast").is_err());
    }
}
