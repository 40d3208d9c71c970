//! Supported locales

use serde::{Deserialize, Serialize};

/// A supported conversation language
///
/// Serialized as its language code. Unrecognized codes deserialize to the
/// base locale, so a stored session never fails to load over its language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Language {
    /// Base locale, used whenever a tag is not recognized
    #[default]
    English,
    Hindi,
    Tamil,
    Telugu,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Telugu,
    ];

    /// BCP 47 primary language subtag
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Telugu => "te",
        }
    }

    /// Parse a language tag, falling back to the base locale.
    ///
    /// Only the primary subtag is considered, so `hi-IN` resolves to Hindi.
    pub fn from_code(tag: &str) -> Self {
        Self::parse_code(tag).unwrap_or_default()
    }

    /// Parse a language tag, returning `None` for unsupported tags
    pub fn parse_code(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or("").trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(primary))
    }

    /// Name of the language written in its own script
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Tamil => "தமிழ்",
            Language::Telugu => "తెలుగు",
        }
    }

    /// Row id used by the language picker
    pub fn selection_id(self) -> &'static str {
        match self {
            Language::English => "lang_en",
            Language::Hindi => "lang_hi",
            Language::Tamil => "lang_ta",
            Language::Telugu => "lang_te",
        }
    }

    pub fn from_selection_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.selection_id() == id)
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Self {
        Language::from_code(&tag)
    }
}

impl From<Language> for &'static str {
    fn from(lang: Language) -> Self {
        lang.code()
    }
}
