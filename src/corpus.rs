//! Emoji corpus - the immutable emoji database the picker runs over.
//!
//! The corpus is partitioned into a fixed, ordered set of categories, each
//! holding an ordered list of emoji. It is loaded once per session (from the
//! bundled table or a JSON file) and never mutated afterwards, so it can be
//! shared freely across threads by reference.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data;
use crate::error::{PickerError, PickerResult};

/// Fixed emoji categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    People,
    Nature,
    Foods,
    Activity,
    Places,
    Objects,
    Symbols,
    Flags,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 8] = [
        Category::People,
        Category::Nature,
        Category::Foods,
        Category::Activity,
        Category::Places,
        Category::Objects,
        Category::Symbols,
        Category::Flags,
    ];

    /// Stable lowercase name, matching the JSON corpus keys.
    pub fn name(self) -> &'static str {
        match self {
            Category::People => "people",
            Category::Nature => "nature",
            Category::Foods => "foods",
            Category::Activity => "activity",
            Category::Places => "places",
            Category::Objects => "objects",
            Category::Symbols => "symbols",
            Category::Flags => "flags",
        }
    }

    /// Human-readable tab title.
    pub fn title(self) -> &'static str {
        match self {
            Category::People => "Smileys & People",
            Category::Nature => "Animals & Nature",
            Category::Foods => "Food & Drink",
            Category::Activity => "Activities",
            Category::Places => "Travel & Places",
            Category::Objects => "Objects",
            Category::Symbols => "Symbols",
            Category::Flags => "Flags",
        }
    }

    /// Parse a lowercase category name.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Position in display order.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A skin-tone variant of an emoji.
///
/// Skin variants are never surfaced as independent entries; they are resolved
/// views of their base emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiSkin {
    /// Code-point sequence of the variant.
    pub unicode: String,
}

/// An emoji entry with its code-point sequence and searchable labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    /// Canonical code-point sequence.
    pub unicode: String,

    /// Primary human label, e.g. "thumbs up".
    pub label: String,

    /// Extra search tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Shortcode aliases, e.g. "thumbsup".
    #[serde(default)]
    pub shortcodes: Vec<String>,

    /// Ordered skin-tone variants, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skins: Option<Vec<EmojiSkin>>,
}

impl Emoji {
    /// All searchable labels: primary label, tags, shortcodes.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.label.as_str())
            .chain(self.tags.iter().flatten().map(String::as_str))
            .chain(self.shortcodes.iter().map(String::as_str))
    }
}

/// The full emoji corpus, partitioned by category.
///
/// Within a category, insertion order is display order.
#[derive(Debug, Clone)]
pub struct EmojiStore {
    // One list per entry of Category::ALL, indexed by Category::index().
    categories: Vec<Vec<Emoji>>,
}

impl EmojiStore {
    /// Create an empty store with all categories present.
    pub fn new() -> Self {
        Self {
            categories: Category::ALL.iter().map(|_| Vec::new()).collect(),
        }
    }

    /// Append an emoji to a category, preserving insertion order.
    pub fn push(&mut self, category: Category, emoji: Emoji) {
        self.categories[category.index()].push(emoji);
    }

    /// Emoji of one category, in display order.
    pub fn category(&self, category: Category) -> &[Emoji] {
        &self.categories[category.index()]
    }

    /// Iterate the whole corpus: category order, then within-category order.
    ///
    /// This is the iteration order search results preserve.
    pub fn iter(&self) -> impl Iterator<Item = &Emoji> {
        self.categories.iter().flatten()
    }

    /// Total number of emoji across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    /// Check whether the corpus holds no emoji at all.
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(Vec::is_empty)
    }

    /// The bundled default corpus.
    pub fn builtin() -> &'static EmojiStore {
        data::builtin()
    }

    /// Parse a corpus from its JSON representation.
    ///
    /// The format is an object keyed by category name:
    /// `{"people": [{"unicode": "😀", "label": "grinning face", ...}], ...}`.
    /// Categories may be omitted; unknown keys are rejected.
    pub fn from_json_str(json: &str) -> PickerResult<Self> {
        let raw: BTreeMap<String, Vec<Emoji>> = serde_json::from_str(json)?;

        let mut store = EmojiStore::new();
        for (name, emojis) in raw {
            let category = Category::from_name(&name)
                .ok_or_else(|| PickerError::Corpus(format!("unknown category '{}'", name)))?;
            store.categories[category.index()] = emojis;
        }
        Ok(store)
    }

    /// Load a corpus from a JSON file.
    pub fn load(path: &Path) -> PickerResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

impl Default for EmojiStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_name_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name("gadgets"), None);
    }

    #[test]
    fn category_order_is_stable() {
        assert_eq!(Category::People.index(), 0);
        assert_eq!(Category::Flags.index(), 7);
        let indices: Vec<usize> = Category::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn iter_follows_category_then_insertion_order() {
        let mut store = EmojiStore::new();
        store.push(
            Category::Nature,
            Emoji {
                unicode: "🐱".to_string(),
                label: "cat".to_string(),
                tags: None,
                shortcodes: vec![],
                skins: None,
            },
        );
        store.push(
            Category::People,
            Emoji {
                unicode: "😀".to_string(),
                label: "grinning face".to_string(),
                tags: None,
                shortcodes: vec![],
                skins: None,
            },
        );
        store.push(
            Category::People,
            Emoji {
                unicode: "😉".to_string(),
                label: "winking face".to_string(),
                tags: None,
                shortcodes: vec![],
                skins: None,
            },
        );

        let order: Vec<&str> = store.iter().map(|e| e.unicode.as_str()).collect();
        assert_eq!(order, vec!["😀", "😉", "🐱"]);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn parse_json_corpus() {
        let json = r#"{
            "people": [
                {"unicode": "😀", "label": "grinning face", "shortcodes": ["grinning"]},
                {
                    "unicode": "👍",
                    "label": "thumbs up",
                    "shortcodes": ["thumbsup", "+1"],
                    "skins": [{"unicode": "👍🏻"}, {"unicode": "👍🏽"}]
                }
            ],
            "flags": [
                {"unicode": "🏁", "label": "chequered flag"}
            ]
        }"#;

        let store = EmojiStore::from_json_str(json).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.category(Category::People).len(), 2);
        assert_eq!(store.category(Category::Nature).len(), 0);

        let thumbs = &store.category(Category::People)[1];
        assert_eq!(thumbs.label, "thumbs up");
        assert_eq!(thumbs.skins.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn parse_rejects_unknown_category() {
        let json = r#"{"gadgets": []}"#;
        let err = EmojiStore::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("gadgets"));
    }

    #[test]
    fn labels_cover_all_alias_sources() {
        let emoji = Emoji {
            unicode: "👍".to_string(),
            label: "thumbs up".to_string(),
            tags: Some(vec!["approve".to_string()]),
            shortcodes: vec!["thumbsup".to_string()],
            skins: None,
        };
        let labels: Vec<&str> = emoji.labels().collect();
        assert_eq!(labels, vec!["thumbs up", "approve", "thumbsup"]);
    }
}
