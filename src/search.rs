//! Emoji search - pure query matching over the corpus.
//!
//! Matching is a case-insensitive substring test against an emoji's labels
//! and its code-point sequence. Results keep corpus order (category order,
//! then within-category order); there is no relevance re-ranking. The
//! functions here hold no state, so they are safe to call on every keystroke.

use crate::corpus::{Emoji, EmojiStore};

/// Outcome of a query against the corpus. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<'a> {
    /// No query has been issued (empty after trimming).
    Initial,

    /// At least one emoji matched, in corpus order.
    Found(Vec<&'a Emoji>),

    /// The trimmed query was non-empty and nothing matched.
    NotFound,
}

impl<'a> SearchResult<'a> {
    /// The matched emoji, if any.
    pub fn emojis(&self) -> Option<&[&'a Emoji]> {
        match self {
            SearchResult::Found(matches) => Some(matches),
            _ => None,
        }
    }

    /// True while no query is active.
    pub fn is_initial(&self) -> bool {
        matches!(self, SearchResult::Initial)
    }
}

/// Search the corpus for emoji matching `raw_query`.
///
/// The query is trimmed of surrounding whitespace and case-folded; an
/// all-whitespace query means no search is active. Pure function of its two
/// inputs.
pub fn search<'a>(store: &'a EmojiStore, raw_query: &str) -> SearchResult<'a> {
    let query = raw_query.trim();
    if query.is_empty() {
        return SearchResult::Initial;
    }

    let folded = query.to_lowercase();
    let matches: Vec<&Emoji> = store
        .iter()
        .filter(|emoji| matches_query(emoji, &folded))
        .collect();

    if matches.is_empty() {
        SearchResult::NotFound
    } else {
        SearchResult::Found(matches)
    }
}

/// Check one emoji against an already trimmed and case-folded query.
pub fn matches_query(emoji: &Emoji, folded_query: &str) -> bool {
    emoji
        .labels()
        .any(|label| label.to_lowercase().contains(folded_query))
        || emoji.unicode.contains(folded_query)
}
