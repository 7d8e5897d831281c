//! Competitor detection: exact substring matches, then semantic matches.

use sightline_core::errors::MatchError;
use sightline_core::models::Degradation;
use sightline_core::traits::SemanticMatcher;
use sightline_core::tracing_setup::events;

/// Competitors found in a response plus any matcher degradation.
#[derive(Debug, Default)]
pub struct CompetitorScan {
    pub found: Vec<String>,
    pub degradation: Option<Degradation>,
}

/// Names from `competitors` that occur verbatim (case-insensitively) in the
/// response, in list order. Spellings that differ only in case or padding
/// count once, under their first spelling.
pub fn exact_matches(response_lower: &str, competitors: &[String]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    for competitor in competitors {
        let needle = competitor.trim().to_lowercase();
        if needle.is_empty() || seen.contains(&needle) {
            continue;
        }
        if response_lower.contains(&needle) {
            found.push(competitor.clone());
        }
        seen.push(needle);
    }
    found
}

/// Exact matches followed by semantic-only matches from `matcher`.
///
/// Matcher output outside `competitors` is dropped. A missing matcher gives
/// exact matches only; an unavailable or failing one does too, and the scan
/// records the degradation.
pub fn scan(
    response: &str,
    response_lower: &str,
    competitors: &[String],
    matcher: Option<&dyn SemanticMatcher>,
) -> CompetitorScan {
    let mut found = exact_matches(response_lower, competitors);

    let Some(matcher) = matcher else {
        return CompetitorScan {
            found,
            degradation: None,
        };
    };
    if competitors.is_empty() {
        return CompetitorScan {
            found,
            degradation: None,
        };
    }

    let semantic = if matcher.is_available() {
        matcher.find_matches(response, competitors)
    } else {
        Err(MatchError::Unavailable {
            reason: "matcher reported unavailable".to_string(),
        })
    };

    match semantic {
        Ok(names) => {
            for name in names {
                let key = name.trim().to_lowercase();
                let known = found.iter().any(|f| f.trim().to_lowercase() == key);
                if competitors.contains(&name) && !known {
                    found.push(name);
                }
            }
            CompetitorScan {
                found,
                degradation: None,
            }
        }
        Err(err) => {
            let reason = err.to_string();
            events::semantic_match_unavailable(matcher.name(), &reason);
            CompetitorScan {
                found,
                degradation: Some(Degradation::SemanticMatchUnavailable {
                    matcher: matcher.name().to_string(),
                    reason,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_matches_follow_list_order() {
        let found = exact_matches("initech then globex", &names(&["Globex", "Initech"]));
        assert_eq!(found, names(&["Globex", "Initech"]));
    }

    #[test]
    fn case_variants_count_once() {
        let found = exact_matches("globex wins", &names(&["Globex", "GLOBEX", " globex "]));
        assert_eq!(found, names(&["Globex"]));
    }

    #[test]
    fn duplicate_and_blank_competitors_are_skipped() {
        let found = exact_matches("globex", &names(&["Globex", "", "Globex"]));
        assert_eq!(found, names(&["Globex"]));
    }
}
