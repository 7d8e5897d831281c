//! Segmentation strategies, most structural first.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_QUERY_MARKER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\bquery\s*\d+\s*:").ok());

static RE_NUMBERED_MARKER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+(?:[.)]|[ \t]+-)[ \t]+").ok());

static RE_BLANK_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").ok());

/// One way of cutting a batched reply into answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitStrategy {
    /// `Query <n>:` markers.
    QueryMarkers,
    /// `<n>. `, `<n>) ` or `<n> - ` at line start.
    NumberedList,
    /// Blank-line paragraph boundaries.
    Paragraphs,
    /// Single newlines.
    Lines,
    /// Nothing usable; every slot gets the fallback content.
    Fallback,
}

impl SplitStrategy {
    /// The segmenting strategies, in the order they are tried.
    pub const CASCADE: [SplitStrategy; 4] = [
        SplitStrategy::QueryMarkers,
        SplitStrategy::NumberedList,
        SplitStrategy::Paragraphs,
        SplitStrategy::Lines,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::QueryMarkers => "query_markers",
            Self::NumberedList => "numbered_list",
            Self::Paragraphs => "paragraphs",
            Self::Lines => "lines",
            Self::Fallback => "fallback",
        }
    }

    /// Cut `blob` into trimmed, non-empty segments.
    ///
    /// Marker strategies keep only text that follows a marker; a blob with no
    /// markers yields nothing. `Fallback` never segments.
    pub fn split(self, blob: &str) -> Vec<String> {
        let pieces: Vec<&str> = match self {
            Self::QueryMarkers => after_markers(&RE_QUERY_MARKER, blob),
            Self::NumberedList => after_markers(&RE_NUMBERED_MARKER, blob),
            Self::Paragraphs => match RE_BLANK_LINE.as_ref() {
                Some(re) => re.split(blob).collect(),
                None => Vec::new(),
            },
            Self::Lines => blob.lines().collect(),
            Self::Fallback => Vec::new(),
        };

        pieces
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Text between consecutive marker matches, skipping any preamble before
/// the first marker.
fn after_markers<'t>(regex: &LazyLock<Option<Regex>>, blob: &'t str) -> Vec<&'t str> {
    let Some(re) = regex.as_ref() else {
        return Vec::new();
    };
    let markers: Vec<_> = re.find_iter(blob).collect();
    markers
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = markers.get(i + 1).map(|next| next.start()).unwrap_or(blob.len());
            &blob[m.end()..end]
        })
        .collect()
}
