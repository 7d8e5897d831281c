//! Competitor rankings from accumulated competitor stats.

use sightline_core::models::{
    CategoryCompetitorRanking, CategoryRankingEntry, CompetitorRanking, CompetitorRankings,
    CompetitorStats,
};

use super::format::{percentage, rate};

/// Rank competitors overall and per category.
///
/// `stats` is in first-seen order, which breaks ties in both rankings.
/// `possible` is `num_queries * num_models`. Categories are emitted in the
/// order of `categories`, skipping those no competitor was mentioned in.
pub fn build_rankings<'c>(
    stats: &[(String, CompetitorStats)],
    possible: usize,
    categories: impl IntoIterator<Item = &'c str>,
) -> CompetitorRankings {
    CompetitorRankings {
        overall: overall_ranking(stats, possible),
        by_category: categories
            .into_iter()
            .filter_map(|key| category_ranking(stats, key))
            .collect(),
    }
}

pub fn overall_ranking(stats: &[(String, CompetitorStats)], possible: usize) -> Vec<CompetitorRanking> {
    let mut ranking: Vec<CompetitorRanking> = stats
        .iter()
        .map(|(name, s)| CompetitorRanking {
            name: name.clone(),
            total_mentions: s.total_mentions,
            mention_rate: rate(s.total_mentions, possible),
            percentage: percentage(s.total_mentions, possible),
        })
        .collect();
    ranking.sort_by(|a, b| b.total_mentions.cmp(&a.total_mentions));
    ranking
}

/// Ranking within one category, or `None` when it has no competitor mentions.
pub fn category_ranking(
    stats: &[(String, CompetitorStats)],
    category: &str,
) -> Option<CategoryCompetitorRanking> {
    let mut entries: Vec<CategoryRankingEntry> = stats
        .iter()
        .filter_map(|(name, s)| {
            let mentions = s.mentions_by_category.get(category);
            (mentions > 0).then(|| CategoryRankingEntry {
                name: name.clone(),
                mentions,
            })
        })
        .collect();
    if entries.is_empty() {
        return None;
    }
    entries.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    Some(CategoryCompetitorRanking {
        category: category.to_string(),
        entries,
    })
}
