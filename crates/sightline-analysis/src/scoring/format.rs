//! Rounding, rates and text previews used in reports.

use sightline_core::constants::{ELLIPSIS, RATE_PRECISION, SCORE_PRECISION};

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `num / den`, or `0.0` when `den` is zero.
pub fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Ratio rounded for rate fields.
pub fn rate(num: usize, den: usize) -> f64 {
    round_to(ratio(num, den), RATE_PRECISION)
}

/// Ratio as a percentage rounded for score fields.
pub fn percentage(num: usize, den: usize) -> f64 {
    round_to(ratio(num, den) * 100.0, SCORE_PRECISION)
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}{ELLIPSIS}", &text[..end]),
        None => text.to_string(),
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round_to(33.333_333, 2), 33.33);
        assert_eq!(round_to(0.666_66, 4), 0.6667);
    }

    #[test]
    fn zero_denominators() {
        assert_eq!(rate(3, 0), 0.0);
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn truncation_counts_chars() {
        assert_eq!(truncate_with_ellipsis("héllo", 5), "héllo");
        assert_eq!(truncate_with_ellipsis("héllo world", 5), "héllo...");
    }

    #[test]
    fn capitalize_lowercases_tail() {
        assert_eq!(capitalize("chatGPT"), "Chatgpt");
        assert_eq!(capitalize(""), "");
    }
}
