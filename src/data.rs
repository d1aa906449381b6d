//! Bundled emoji corpus.
//!
//! A static table covering all eight categories, used when no external corpus
//! file is configured. Entries follow corpus order: the order here is the
//! order emoji appear in the grid and in search results.

use once_cell::sync::Lazy;

use crate::corpus::{Category, Emoji, EmojiSkin, EmojiStore};

/// A corpus entry before conversion into an owned [`Emoji`].
struct RawEmoji {
    unicode: &'static str,
    label: &'static str,
    shortcodes: &'static [&'static str],
    skins: &'static [&'static str],
}

impl RawEmoji {
    fn to_emoji(&self) -> Emoji {
        let skins = if self.skins.is_empty() {
            None
        } else {
            Some(
                self.skins
                    .iter()
                    .map(|unicode| EmojiSkin {
                        unicode: (*unicode).to_string(),
                    })
                    .collect(),
            )
        };
        Emoji {
            unicode: self.unicode.to_string(),
            label: self.label.to_string(),
            tags: None,
            shortcodes: self.shortcodes.iter().map(|s| (*s).to_string()).collect(),
            skins,
        }
    }
}

static STORE: Lazy<EmojiStore> = Lazy::new(|| {
    let mut store = EmojiStore::new();
    let groups: [(Category, &[RawEmoji]); 8] = [
        (Category::People, PEOPLE),
        (Category::Nature, NATURE),
        (Category::Foods, FOODS),
        (Category::Activity, ACTIVITY),
        (Category::Places, PLACES),
        (Category::Objects, OBJECTS),
        (Category::Symbols, SYMBOLS),
        (Category::Flags, FLAGS),
    ];
    for (category, raws) in groups {
        for raw in raws {
            store.push(category, raw.to_emoji());
        }
    }
    store
});

/// The bundled corpus, built on first access.
pub(crate) fn builtin() -> &'static EmojiStore {
    &STORE
}

static PEOPLE: &[RawEmoji] = &[
    RawEmoji {
        unicode: "😀",
        label: "grinning face",
        shortcodes: &["grinning", "grin", "smile"],
        skins: &[],
    },
    RawEmoji {
        unicode: "😃",
        label: "grinning face with big eyes",
        shortcodes: &["smiley", "happy"],
        skins: &[],
    },
    RawEmoji {
        unicode: "😄",
        label: "grinning face with smiling eyes",
        shortcodes: &["smile", "happy", "joy"],
        skins: &[],
    },
    RawEmoji {
        unicode: "😂",
        label: "face with tears of joy",
        shortcodes: &["joy", "laugh", "tears"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🤣",
        label: "rolling on the floor laughing",
        shortcodes: &["rofl", "laughing"],
        skins: &[],
    },
    RawEmoji {
        unicode: "😊",
        label: "smiling face with smiling eyes",
        shortcodes: &["blush", "happy"],
        skins: &[],
    },
    RawEmoji {
        unicode: "😉",
        label: "winking face",
        shortcodes: &["wink", "flirt"],
        skins: &[],
    },
    RawEmoji {
        unicode: "😍",
        label: "smiling face with heart-eyes",
        shortcodes: &["heart_eyes", "love", "crush"],
        skins: &[],
    },
    RawEmoji {
        unicode: "😘",
        label: "face blowing a kiss",
        shortcodes: &["kiss", "blow_kiss"],
        skins: &[],
    },
    RawEmoji {
        unicode: "😎",
        label: "smiling face with sunglasses",
        shortcodes: &["sunglasses", "cool"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🤔",
        label: "thinking face",
        shortcodes: &["thinking", "hmm", "wonder"],
        skins: &[],
    },
    RawEmoji {
        unicode: "😐",
        label: "neutral face",
        shortcodes: &["neutral", "meh"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🙄",
        label: "face with rolling eyes",
        shortcodes: &["eye_roll", "whatever"],
        skins: &[],
    },
    RawEmoji {
        unicode: "😴",
        label: "sleeping face",
        shortcodes: &["sleeping", "zzz", "tired"],
        skins: &[],
    },
    RawEmoji {
        unicode: "😭",
        label: "loudly crying face",
        shortcodes: &["sob", "cry", "sad"],
        skins: &[],
    },
    RawEmoji {
        unicode: "😡",
        label: "enraged face",
        shortcodes: &["rage", "angry", "mad"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🥳",
        label: "partying face",
        shortcodes: &["party", "celebration"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🤯",
        label: "exploding head",
        shortcodes: &["mind_blown", "shocked"],
        skins: &[],
    },
    RawEmoji {
        unicode: "😇",
        label: "smiling face with halo",
        shortcodes: &["innocent", "angel"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🥺",
        label: "pleading face",
        shortcodes: &["pleading", "puppy_eyes"],
        skins: &[],
    },
    RawEmoji {
        unicode: "👍",
        label: "thumbs up",
        shortcodes: &["thumbsup", "+1", "like"],
        skins: &["👍🏻", "👍🏼", "👍🏽", "👍🏾", "👍🏿"],
    },
    RawEmoji {
        unicode: "👎",
        label: "thumbs down",
        shortcodes: &["thumbsdown", "-1", "dislike"],
        skins: &["👎🏻", "👎🏼", "👎🏽", "👎🏾", "👎🏿"],
    },
    RawEmoji {
        unicode: "👋",
        label: "waving hand",
        shortcodes: &["wave", "hello", "goodbye"],
        skins: &["👋🏻", "👋🏼", "👋🏽", "👋🏾", "👋🏿"],
    },
    RawEmoji {
        unicode: "👏",
        label: "clapping hands",
        shortcodes: &["clap", "applause"],
        skins: &["👏🏻", "👏🏼", "👏🏽", "👏🏾", "👏🏿"],
    },
    RawEmoji {
        unicode: "🙌",
        label: "raising hands",
        shortcodes: &["raised_hands", "hooray"],
        skins: &["🙌🏻", "🙌🏼", "🙌🏽", "🙌🏾", "🙌🏿"],
    },
    RawEmoji {
        unicode: "🙏",
        label: "folded hands",
        shortcodes: &["pray", "thanks", "please"],
        skins: &["🙏🏻", "🙏🏼", "🙏🏽", "🙏🏾", "🙏🏿"],
    },
    RawEmoji {
        unicode: "💪",
        label: "flexed biceps",
        shortcodes: &["muscle", "strong", "flex"],
        skins: &["💪🏻", "💪🏼", "💪🏽", "💪🏾", "💪🏿"],
    },
    RawEmoji {
        unicode: "👌",
        label: "ok hand",
        shortcodes: &["ok_hand", "perfect"],
        skins: &["👌🏻", "👌🏼", "👌🏽", "👌🏾", "👌🏿"],
    },
    RawEmoji {
        unicode: "🤝",
        label: "handshake",
        shortcodes: &["handshake", "deal", "agreement"],
        skins: &["🤝🏻", "🤝🏼", "🤝🏽", "🤝🏾", "🤝🏿"],
    },
    RawEmoji {
        unicode: "❤️",
        label: "red heart",
        shortcodes: &["heart", "love"],
        skins: &[],
    },
    RawEmoji {
        unicode: "💜",
        label: "purple heart",
        shortcodes: &["purple_heart"],
        skins: &[],
    },
    RawEmoji {
        unicode: "💔",
        label: "broken heart",
        shortcodes: &["broken_heart", "heartbreak"],
        skins: &[],
    },
];

static NATURE: &[RawEmoji] = &[
    RawEmoji {
        unicode: "🐶",
        label: "dog face",
        shortcodes: &["dog", "puppy"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🐱",
        label: "cat face",
        shortcodes: &["cat", "kitten"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🐭",
        label: "mouse face",
        shortcodes: &["mouse"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🦊",
        label: "fox",
        shortcodes: &["fox", "fox_face"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🐻",
        label: "bear",
        shortcodes: &["bear"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🐼",
        label: "panda",
        shortcodes: &["panda"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🦁",
        label: "lion",
        shortcodes: &["lion"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🐸",
        label: "frog",
        shortcodes: &["frog"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🐢",
        label: "turtle",
        shortcodes: &["turtle", "tortoise"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🦋",
        label: "butterfly",
        shortcodes: &["butterfly"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🌸",
        label: "cherry blossom",
        shortcodes: &["cherry_blossom", "flower", "spring"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🌳",
        label: "deciduous tree",
        shortcodes: &["tree"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🌙",
        label: "crescent moon",
        shortcodes: &["moon", "crescent"],
        skins: &[],
    },
    RawEmoji {
        unicode: "⭐",
        label: "star",
        shortcodes: &["star"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🌈",
        label: "rainbow",
        shortcodes: &["rainbow"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🔥",
        label: "fire",
        shortcodes: &["fire", "flame", "lit"],
        skins: &[],
    },
    RawEmoji {
        unicode: "❄️",
        label: "snowflake",
        shortcodes: &["snowflake", "snow", "winter"],
        skins: &[],
    },
];

static FOODS: &[RawEmoji] = &[
    RawEmoji {
        unicode: "🍏",
        label: "green apple",
        shortcodes: &["green_apple"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🍎",
        label: "red apple",
        shortcodes: &["apple"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🍌",
        label: "banana",
        shortcodes: &["banana"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🍉",
        label: "watermelon",
        shortcodes: &["watermelon"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🍓",
        label: "strawberry",
        shortcodes: &["strawberry"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🍕",
        label: "pizza",
        shortcodes: &["pizza"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🍔",
        label: "hamburger",
        shortcodes: &["hamburger", "burger"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🍟",
        label: "french fries",
        shortcodes: &["fries"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🍣",
        label: "sushi",
        shortcodes: &["sushi"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🎂",
        label: "birthday cake",
        shortcodes: &["birthday", "cake"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🍺",
        label: "beer mug",
        shortcodes: &["beer"],
        skins: &[],
    },
    RawEmoji {
        unicode: "☕",
        label: "hot beverage",
        shortcodes: &["coffee", "tea"],
        skins: &[],
    },
];

static ACTIVITY: &[RawEmoji] = &[
    RawEmoji {
        unicode: "⚽",
        label: "soccer ball",
        shortcodes: &["soccer", "football"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🏀",
        label: "basketball",
        shortcodes: &["basketball"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🎾",
        label: "tennis",
        shortcodes: &["tennis"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🎳",
        label: "bowling",
        shortcodes: &["bowling"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🏆",
        label: "trophy",
        shortcodes: &["trophy", "winner"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🎯",
        label: "bullseye",
        shortcodes: &["dart", "target"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🎮",
        label: "video game",
        shortcodes: &["video_game", "gaming", "controller"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🎲",
        label: "game die",
        shortcodes: &["dice", "die"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🎉",
        label: "party popper",
        shortcodes: &["tada", "party", "celebration"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🎸",
        label: "guitar",
        shortcodes: &["guitar"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🎤",
        label: "microphone",
        shortcodes: &["microphone", "sing", "karaoke"],
        skins: &[],
    },
];

static PLACES: &[RawEmoji] = &[
    RawEmoji {
        unicode: "🚗",
        label: "automobile",
        shortcodes: &["car"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🚕",
        label: "taxi",
        shortcodes: &["taxi"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🚀",
        label: "rocket",
        shortcodes: &["rocket", "launch", "ship"],
        skins: &[],
    },
    RawEmoji {
        unicode: "✈️",
        label: "airplane",
        shortcodes: &["airplane", "flight"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🚲",
        label: "bicycle",
        shortcodes: &["bike", "bicycle"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🏠",
        label: "house",
        shortcodes: &["house", "home"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🏖️",
        label: "beach with umbrella",
        shortcodes: &["beach"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🗽",
        label: "statue of liberty",
        shortcodes: &["statue_of_liberty"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🌋",
        label: "volcano",
        shortcodes: &["volcano"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🗼",
        label: "tokyo tower",
        shortcodes: &["tokyo_tower"],
        skins: &[],
    },
];

static OBJECTS: &[RawEmoji] = &[
    RawEmoji {
        unicode: "⌚",
        label: "watch",
        shortcodes: &["watch"],
        skins: &[],
    },
    RawEmoji {
        unicode: "📱",
        label: "mobile phone",
        shortcodes: &["phone", "iphone"],
        skins: &[],
    },
    RawEmoji {
        unicode: "💻",
        label: "laptop",
        shortcodes: &["laptop", "computer"],
        skins: &[],
    },
    RawEmoji {
        unicode: "⌨️",
        label: "keyboard",
        shortcodes: &["keyboard"],
        skins: &[],
    },
    RawEmoji {
        unicode: "📷",
        label: "camera",
        shortcodes: &["camera"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🔋",
        label: "battery",
        shortcodes: &["battery"],
        skins: &[],
    },
    RawEmoji {
        unicode: "💡",
        label: "light bulb",
        shortcodes: &["bulb", "idea"],
        skins: &[],
    },
    RawEmoji {
        unicode: "📚",
        label: "books",
        shortcodes: &["books"],
        skins: &[],
    },
    RawEmoji {
        unicode: "✏️",
        label: "pencil",
        shortcodes: &["pencil"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🔑",
        label: "key",
        shortcodes: &["key"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🎁",
        label: "wrapped gift",
        shortcodes: &["gift", "present"],
        skins: &[],
    },
];

static SYMBOLS: &[RawEmoji] = &[
    RawEmoji {
        unicode: "✅",
        label: "check mark button",
        shortcodes: &["white_check_mark", "done"],
        skins: &[],
    },
    RawEmoji {
        unicode: "❌",
        label: "cross mark",
        shortcodes: &["x", "no"],
        skins: &[],
    },
    RawEmoji {
        unicode: "❓",
        label: "question mark",
        shortcodes: &["question"],
        skins: &[],
    },
    RawEmoji {
        unicode: "❗",
        label: "exclamation mark",
        shortcodes: &["exclamation"],
        skins: &[],
    },
    RawEmoji {
        unicode: "💯",
        label: "hundred points",
        shortcodes: &["100", "perfect"],
        skins: &[],
    },
    RawEmoji {
        unicode: "⚠️",
        label: "warning",
        shortcodes: &["warning", "caution"],
        skins: &[],
    },
    RawEmoji {
        unicode: "♻️",
        label: "recycling symbol",
        shortcodes: &["recycle"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🔔",
        label: "bell",
        shortcodes: &["bell", "notification"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🚫",
        label: "prohibited",
        shortcodes: &["no_entry", "forbidden"],
        skins: &[],
    },
    RawEmoji {
        unicode: "➕",
        label: "plus",
        shortcodes: &["plus", "add"],
        skins: &[],
    },
];

static FLAGS: &[RawEmoji] = &[
    RawEmoji {
        unicode: "🏁",
        label: "chequered flag",
        shortcodes: &["checkered_flag", "finish"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🚩",
        label: "triangular flag",
        shortcodes: &["triangular_flag", "red_flag"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🏳️",
        label: "white flag",
        shortcodes: &["white_flag", "surrender"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🏴",
        label: "black flag",
        shortcodes: &["black_flag"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🏳️‍🌈",
        label: "rainbow flag",
        shortcodes: &["rainbow_flag", "pride"],
        skins: &[],
    },
    RawEmoji {
        unicode: "🇪🇺",
        label: "flag european union",
        shortcodes: &["eu", "european_union"],
        skins: &[],
    },
];
