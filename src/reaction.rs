//! Free-form reactions and reaction selection.
//!
//! When a search matches nothing, the trimmed query itself is offered as a
//! literal reaction, capped at [`MAX_REACTION_LENGTH`] characters. Selected
//! reaction keys are tracked in an insertion-order-preserving set.

/// Maximum character length of a free-form reaction before it is ellipsized.
pub const MAX_REACTION_LENGTH: usize = 50;

/// Truncate `text` to at most `max` characters, replacing the tail with `…`.
///
/// `max` must be at least 1. Character counts, not bytes, so multi-byte emoji
/// are never split.
pub fn ellipsize(text: &str, max: usize) -> String {
    debug_assert!(max >= 1);
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

/// Build the free-form reaction offered alongside (or instead of) search
/// results: the trimmed query, ellipsized to [`MAX_REACTION_LENGTH`].
///
/// Returns `None` when the query is all whitespace, since there is nothing
/// to react with.
pub fn freeform_reaction(raw_query: &str) -> Option<String> {
    let trimmed = raw_query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(ellipsize(trimmed, MAX_REACTION_LENGTH))
}

/// An insertion-order-preserving set of reaction keys.
///
/// Only uniqueness and insertion order are guaranteed; lookups are linear,
/// which is fine at reaction-count scale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedReactions {
    keys: Vec<String>,
}

impl SelectedReactions {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a reaction key is selected.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Add a key if absent. Returns true if it was added.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.contains(key) {
            return false;
        }
        self.keys.push(key.to_string());
        true
    }

    /// Remove a key if present. Returns true if it was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.keys.len() != before
    }

    /// Insert the key if absent, remove it if present.
    pub fn toggle(&mut self, key: &str) {
        if !self.insert(key) {
            self.remove(key);
        }
    }

    /// Selected keys, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Drop all selections.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipsize_keeps_short_text() {
        assert_eq!(ellipsize("hello", 10), "hello");
        assert_eq!(ellipsize("hello", 5), "hello");
    }

    #[test]
    fn ellipsize_truncates_long_text() {
        assert_eq!(ellipsize("hello world", 5), "hell…");
        assert_eq!(ellipsize("ab", 1), "…");
    }

    #[test]
    fn ellipsize_counts_characters_not_bytes() {
        // Four emoji characters fit in a budget of four.
        assert_eq!(ellipsize("😀😀😀😀", 4), "😀😀😀😀");
        assert_eq!(ellipsize("😀😀😀😀", 3), "😀😀…");
    }

    #[test]
    fn freeform_reaction_trims_and_caps() {
        assert_eq!(freeform_reaction("  party  "), Some("party".to_string()));
        assert_eq!(freeform_reaction("   "), None);

        let long = "x".repeat(MAX_REACTION_LENGTH + 10);
        let reaction = freeform_reaction(&long).unwrap();
        assert_eq!(reaction.chars().count(), MAX_REACTION_LENGTH);
        assert!(reaction.ends_with('…'));
    }

    #[test]
    fn freeform_reaction_passes_short_queries_through() {
        assert_eq!(
            freeform_reaction("xyz-no-match"),
            Some("xyz-no-match".to_string())
        );
    }

    #[test]
    fn selection_preserves_insertion_order() {
        let mut selected = SelectedReactions::new();
        selected.insert("👍");
        selected.insert("🎉");
        selected.insert("👍"); // duplicate, ignored
        selected.insert("❤️");

        let keys: Vec<&str> = selected.iter().collect();
        assert_eq!(keys, vec!["👍", "🎉", "❤️"]);
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selected = SelectedReactions::new();
        selected.toggle("👍");
        assert!(selected.contains("👍"));
        selected.toggle("👍");
        assert!(!selected.contains("👍"));
        assert!(selected.is_empty());
    }

    #[test]
    fn remove_reports_outcome() {
        let mut selected = SelectedReactions::new();
        assert!(!selected.remove("👍"));
        selected.insert("👍");
        assert!(selected.remove("👍"));
    }
}
