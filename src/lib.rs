//! emopick - emoji search and reaction-picker engine.
//!
//! The crate maps free-text queries against an immutable emoji corpus,
//! resolves skin-tone variants, and drives the picker's browsing/searching
//! state machine. Rendering, input handling, and reaction delivery stay with
//! the embedding application; this crate only consumes and produces data.
//!
//! # Architecture
//!
//! - [`corpus`] - Emoji data model and JSON corpus loading
//! - [`search`] - Pure query matching, corpus-ordered results
//! - [`skin`] - Skin-tone modifier extraction and resolution
//! - [`picker`] - Event-driven picker state machine
//! - [`reaction`] - Free-form reactions and the selection set
//! - [`config`] - Configuration loading
//! - [`prefs`] - Persisted session preferences
//!
//! # Example
//!
//! ```
//! use emopick::{search, EmojiStore, SearchResult};
//!
//! let store = EmojiStore::builtin();
//! match search(store, "thumbs") {
//!     SearchResult::Found(matches) => assert!(!matches.is_empty()),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

pub mod config;
pub mod corpus;
pub mod picker;
pub mod prefs;
pub mod reaction;
pub mod search;
pub mod skin;

// Internal modules
mod data;
mod error;

// Re-export commonly used types for convenience
pub use config::PickerConfig;
pub use corpus::{Category, Emoji, EmojiSkin, EmojiStore};
pub use error::{PickerError, PickerResult};
pub use picker::{PickerEvent, PickerMode, PickerState};
pub use reaction::{ellipsize, freeform_reaction, SelectedReactions, MAX_REACTION_LENGTH};
pub use search::{search, SearchResult};
pub use skin::{extract_skin_modifier, resolve_skin, SkinTone, SKIN_MODIFIERS};
