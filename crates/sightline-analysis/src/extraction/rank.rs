//! Rank inference: where does the target sit in a list-like answer?
//!
//! Strategies run in [`RankStrategy::ORDER`]; the first that yields a rank
//! wins. All matching is done on lowercased text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use sightline_core::constants::ORDINAL_TOKENS;

static RE_NUMBERED_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(\d+)[ \t]*[.)\-][ \t]*(.+)$").ok());

static ORDINAL_PATTERNS: LazyLock<Vec<(Regex, u32)>> = LazyLock::new(|| {
    ORDINAL_TOKENS
        .iter()
        .filter_map(|(token, rank)| {
            let escaped = regex::escape(token);
            let pattern = if token.starts_with(|c: char| c.is_alphanumeric()) {
                format!(r"\b{escaped}\b")
            } else {
                format!(r"{escaped}\b")
            };
            Regex::new(&pattern).ok().map(|re| (re, *rank))
        })
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankStrategy {
    /// `3. Acme ...` list lines.
    NumberedList,
    /// `first`, `#2`, ... followed closely by the target.
    OrdinalProximity,
    /// Position among all brands by first appearance.
    OrderOfAppearance,
}

impl RankStrategy {
    pub const ORDER: [RankStrategy; 3] = [
        RankStrategy::NumberedList,
        RankStrategy::OrdinalProximity,
        RankStrategy::OrderOfAppearance,
    ];
}

/// Inputs shared by every rank strategy.
pub struct RankContext<'a> {
    pub response_lower: &'a str,
    pub target_lower: &'a str,
    pub competitors_lower: &'a [String],
    pub ordinal_window_chars: usize,
}

impl RankStrategy {
    pub fn infer(self, ctx: &RankContext<'_>) -> Option<u32> {
        match self {
            Self::NumberedList => numbered_list_rank(ctx.response_lower, ctx.target_lower),
            Self::OrdinalProximity => {
                ordinal_rank(ctx.response_lower, ctx.target_lower, ctx.ordinal_window_chars)
            }
            Self::OrderOfAppearance => {
                appearance_rank(ctx.response_lower, ctx.target_lower, ctx.competitors_lower)
            }
        }
    }
}

/// First successful strategy, together with the strategy that produced it.
pub fn infer_rank(ctx: &RankContext<'_>) -> Option<(u32, RankStrategy)> {
    if ctx.response_lower.is_empty() || ctx.target_lower.is_empty() {
        return None;
    }
    RankStrategy::ORDER
        .into_iter()
        .find_map(|strategy| strategy.infer(ctx).map(|rank| (rank, strategy)))
}

fn numbered_list_rank(response: &str, target: &str) -> Option<u32> {
    let re = RE_NUMBERED_LINE.as_ref()?;
    re.captures_iter(response).find_map(|caps| {
        let item = caps.get(2)?.as_str();
        if !item.contains(target) {
            return None;
        }
        // Ranks are 1-based; a `0.` item is not a position.
        caps.get(1)?.as_str().parse::<u32>().ok().filter(|&n| n > 0)
    })
}

fn ordinal_rank(response: &str, target: &str, window_chars: usize) -> Option<u32> {
    ORDINAL_PATTERNS.iter().find_map(|(re, rank)| {
        re.find_iter(response)
            .any(|m| window_after(response, m.end(), window_chars).contains(target))
            .then_some(*rank)
    })
}

/// Up to `chars` characters of `text` starting at byte offset `start`.
fn window_after(text: &str, start: usize, chars: usize) -> &str {
    let tail = &text[start..];
    match tail.char_indices().nth(chars) {
        Some((end, _)) => &tail[..end],
        None => tail,
    }
}

fn appearance_rank(response: &str, target: &str, competitors: &[String]) -> Option<u32> {
    let target_pos = response.find(target)?;

    // (offset, is_target); the target goes first so it wins offset ties.
    let mut positions: Vec<(usize, bool)> = vec![(target_pos, true)];
    let mut seen: Vec<&str> = vec![target];
    for competitor in competitors {
        let name = competitor.as_str();
        if name.is_empty() || seen.contains(&name) {
            continue;
        }
        seen.push(name);
        if let Some(pos) = response.find(name) {
            positions.push((pos, false));
        }
    }

    if positions.len() < 2 {
        return None;
    }
    positions.sort_by_key(|&(pos, _)| pos);
    positions
        .iter()
        .position(|&(_, is_target)| is_target)
        .map(|i| i as u32 + 1)
}
