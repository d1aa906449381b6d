//! Skin-tone modifier handling.
//!
//! A skin tone is a single Unicode modifier code point (U+1F3FB..U+1F3FF)
//! appended to a base emoji. Resolution is total: when an emoji has no
//! matching variant, the base sequence is the defined fallback.

use serde::{Deserialize, Serialize};

use crate::corpus::Emoji;

/// The five Fitzpatrick skin-tone modifier code points, light to dark.
pub const SKIN_MODIFIERS: [char; 5] = [
    '\u{1F3FB}', // 🏻 light
    '\u{1F3FC}', // 🏼 medium-light
    '\u{1F3FD}', // 🏽 medium
    '\u{1F3FE}', // 🏾 medium-dark
    '\u{1F3FF}', // 🏿 dark
];

/// A validated skin-tone modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkinTone(char);

impl SkinTone {
    /// Wrap a modifier code point. Returns `None` for anything outside
    /// [`SKIN_MODIFIERS`].
    pub fn new(modifier: char) -> Option<SkinTone> {
        if SKIN_MODIFIERS.contains(&modifier) {
            Some(SkinTone(modifier))
        } else {
            None
        }
    }

    /// The underlying modifier code point.
    pub fn as_char(self) -> char {
        self.0
    }
}

/// Find the first skin-tone modifier in `text`, scanning code points in order.
///
/// Used to detect whether a rendered reaction string already encodes a tone.
pub fn extract_skin_modifier(text: &str) -> Option<SkinTone> {
    text.chars().find_map(SkinTone::new)
}

/// Resolve the display sequence for an emoji under an optional tone preference.
///
/// Without a preference, or for an emoji without variants, this is the base
/// sequence. Otherwise the first variant containing the requested modifier
/// wins, falling back to the base sequence when none matches.
pub fn resolve_skin<'a>(emoji: &'a Emoji, tone: Option<SkinTone>) -> &'a str {
    let tone = match tone {
        Some(tone) => tone,
        None => return &emoji.unicode,
    };
    emoji
        .skins
        .iter()
        .flatten()
        .find(|skin| skin.unicode.contains(tone.as_char()))
        .map(|skin| skin.unicode.as_str())
        .unwrap_or(&emoji.unicode)
}
