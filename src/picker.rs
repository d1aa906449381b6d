//! Picker state machine - browsing categories vs. an active search.
//!
//! Events form a closed enum consumed by an explicit transition function
//! ([`PickerState::apply`]) that returns the next state. Search results are
//! never stored in the state; they are recomputed from the current query on
//! demand, so the displayed result always reflects the latest query.
//!
//! Deactivation policy: clearing the query does NOT leave search mode. Only
//! an explicit `SetSearchActive(false)` (or `Reset`) returns to browsing.

use crate::corpus::{Category, Emoji, EmojiStore};
use crate::reaction::SelectedReactions;
use crate::search::{self, SearchResult};
use crate::skin::{resolve_skin, SkinTone};

/// Which surface the picker is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerMode {
    /// Category grid, paged by tab.
    Browsing { category: Category },

    /// Search surface. `category` is where browsing resumes on deactivation.
    Searching { query: String, category: Category },
}

/// Everything that can happen to the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// Switch to a category tab (leaves search mode if active).
    SelectCategory(Category),

    /// Activate or deactivate the search surface.
    SetSearchActive(bool),

    /// Replace the search query. Entering a non-empty query while browsing
    /// activates search.
    UpdateSearchQuery(String),

    /// Select or deselect a reaction key.
    ToggleReaction(String),

    /// Change the session skin-tone preference.
    SetSkinTone(Option<SkinTone>),

    /// Back to the first category with search cleared. Selection and skin
    /// tone survive: they belong to the conversation, not the sheet.
    Reset,
}

/// Immutable picker state; [`apply`](PickerState::apply) produces the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    pub mode: PickerMode,
    pub selected: SelectedReactions,
    pub skin_tone: Option<SkinTone>,
}

impl PickerState {
    /// Initial state: browsing the first category, nothing selected.
    pub fn new() -> Self {
        Self {
            mode: PickerMode::Browsing {
                category: Category::People,
            },
            selected: SelectedReactions::new(),
            skin_tone: None,
        }
    }

    /// Consume an event and return the next state.
    pub fn apply(mut self, event: PickerEvent) -> PickerState {
        match event {
            PickerEvent::SelectCategory(category) => {
                self.mode = PickerMode::Browsing { category };
            }
            PickerEvent::SetSearchActive(true) => {
                if let PickerMode::Browsing { category } = self.mode {
                    self.mode = PickerMode::Searching {
                        query: String::new(),
                        category,
                    };
                }
            }
            PickerEvent::SetSearchActive(false) => {
                if let PickerMode::Searching { category, .. } = self.mode {
                    self.mode = PickerMode::Browsing { category };
                }
            }
            PickerEvent::UpdateSearchQuery(new_query) => match self.mode {
                PickerMode::Searching { category, .. } => {
                    self.mode = PickerMode::Searching {
                        query: new_query,
                        category,
                    };
                }
                PickerMode::Browsing { category } => {
                    // Typing activates search; an empty update does not.
                    if !new_query.trim().is_empty() {
                        self.mode = PickerMode::Searching {
                            query: new_query,
                            category,
                        };
                    }
                }
            },
            PickerEvent::ToggleReaction(key) => {
                self.selected.toggle(&key);
            }
            PickerEvent::SetSkinTone(tone) => {
                self.skin_tone = tone;
            }
            PickerEvent::Reset => {
                self.mode = PickerMode::Browsing {
                    category: Category::People,
                };
            }
        }
        self
    }

    /// True while the search surface is shown.
    pub fn is_search_active(&self) -> bool {
        matches!(self.mode, PickerMode::Searching { .. })
    }

    /// The current raw query, empty while browsing.
    pub fn query(&self) -> &str {
        match &self.mode {
            PickerMode::Searching { query, .. } => query,
            PickerMode::Browsing { .. } => "",
        }
    }

    /// The category shown while browsing, or resumed after search.
    pub fn category(&self) -> Category {
        match &self.mode {
            PickerMode::Browsing { category } => *category,
            PickerMode::Searching { category, .. } => *category,
        }
    }

    /// Run the current query against the corpus.
    ///
    /// `Initial` while browsing or while the query is all whitespace.
    pub fn search_results<'a>(&self, store: &'a EmojiStore) -> SearchResult<'a> {
        match &self.mode {
            PickerMode::Searching { query, .. } => search::search(store, query),
            PickerMode::Browsing { .. } => SearchResult::Initial,
        }
    }

    /// The sequence to display for an emoji under the current tone preference.
    pub fn display_unicode<'a>(&self, emoji: &'a Emoji) -> &'a str {
        resolve_skin(emoji, self.skin_tone)
    }

    /// Whether an emoji should render as selected: its base sequence or any
    /// of its skin variants is a selected reaction key.
    pub fn is_selected(&self, emoji: &Emoji) -> bool {
        self.selected.contains(&emoji.unicode)
            || emoji
                .skins
                .iter()
                .flatten()
                .any(|skin| self.selected.contains(&skin.unicode))
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{EmojiSkin, EmojiStore};

    #[test]
    fn starts_browsing_first_category() {
        let state = PickerState::new();
        assert!(!state.is_search_active());
        assert_eq!(state.category(), Category::People);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn select_category_switches_tab() {
        let state = PickerState::new().apply(PickerEvent::SelectCategory(Category::Flags));
        assert_eq!(state.category(), Category::Flags);
        assert!(!state.is_search_active());
    }

    #[test]
    fn activating_search_keeps_return_category() {
        let state = PickerState::new()
            .apply(PickerEvent::SelectCategory(Category::Foods))
            .apply(PickerEvent::SetSearchActive(true));
        assert!(state.is_search_active());

        let state = state.apply(PickerEvent::SetSearchActive(false));
        assert!(!state.is_search_active());
        assert_eq!(state.category(), Category::Foods);
    }

    #[test]
    fn typing_while_browsing_activates_search() {
        let state = PickerState::new().apply(PickerEvent::UpdateSearchQuery("cat".to_string()));
        assert!(state.is_search_active());
        assert_eq!(state.query(), "cat");

        // An all-whitespace update while browsing does nothing.
        let state = PickerState::new().apply(PickerEvent::UpdateSearchQuery("  ".to_string()));
        assert!(!state.is_search_active());
    }

    #[test]
    fn clearing_query_stays_in_search_mode() {
        // Explicit-deactivation policy: the empty query alone never leaves
        // the search surface.
        let state = PickerState::new()
            .apply(PickerEvent::SetSearchActive(true))
            .apply(PickerEvent::UpdateSearchQuery("cat".to_string()))
            .apply(PickerEvent::UpdateSearchQuery(String::new()));
        assert!(state.is_search_active());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn reset_clears_search_but_keeps_selection_and_tone() {
        let tone = SkinTone::new('\u{1F3FD}');
        let state = PickerState::new()
            .apply(PickerEvent::ToggleReaction("👍".to_string()))
            .apply(PickerEvent::SetSkinTone(tone))
            .apply(PickerEvent::UpdateSearchQuery("cat".to_string()))
            .apply(PickerEvent::Reset);

        assert!(!state.is_search_active());
        assert_eq!(state.category(), Category::People);
        assert!(state.selected.contains("👍"));
        assert_eq!(state.skin_tone, tone);
    }

    #[test]
    fn search_results_follow_mode() {
        let store = EmojiStore::builtin();
        let state = PickerState::new();
        assert!(state.search_results(store).is_initial());

        let state = state.apply(PickerEvent::UpdateSearchQuery("pizza".to_string()));
        let results = state.search_results(store);
        assert!(results.emojis().is_some());

        let state = state.apply(PickerEvent::UpdateSearchQuery("   ".to_string()));
        assert!(state.search_results(store).is_initial());
    }

    #[test]
    fn toggle_reaction_round_trips() {
        let state = PickerState::new()
            .apply(PickerEvent::ToggleReaction("🎉".to_string()))
            .apply(PickerEvent::ToggleReaction("🎉".to_string()));
        assert!(state.selected.is_empty());
    }

    #[test]
    fn selection_highlight_covers_skin_variants() {
        let emoji = Emoji {
            unicode: "👍".to_string(),
            label: "thumbs up".to_string(),
            tags: None,
            shortcodes: vec![],
            skins: Some(vec![EmojiSkin {
                unicode: "👍🏽".to_string(),
            }]),
        };

        // The user reacted with a toned variant; the base entry highlights.
        let state = PickerState::new().apply(PickerEvent::ToggleReaction("👍🏽".to_string()));
        assert!(state.is_selected(&emoji));
    }

    #[test]
    fn display_unicode_applies_tone_preference() {
        let emoji = Emoji {
            unicode: "👍".to_string(),
            label: "thumbs up".to_string(),
            tags: None,
            shortcodes: vec![],
            skins: Some(vec![EmojiSkin {
                unicode: "👍🏽".to_string(),
            }]),
        };

        let state = PickerState::new().apply(PickerEvent::SetSkinTone(SkinTone::new('\u{1F3FD}')));
        assert_eq!(state.display_unicode(&emoji), "👍🏽");
        let state = state.apply(PickerEvent::SetSkinTone(None));
        assert_eq!(state.display_unicode(&emoji), "👍");
    }
}
