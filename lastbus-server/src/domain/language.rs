//! Supported display languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unsupported language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {code}")]
pub struct InvalidLanguage {
    code: String,
}

/// A language the schedules are published in.
///
/// Every schedule record carries one variant of each localized field per
/// language, so adding a language here is what makes the field table in
/// [`crate::domain::ScheduleRecord::field`] fail to compile until the new
/// variants exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Tamil.
    #[default]
    Ta,
    /// English.
    En,
}

impl Language {
    /// All supported languages, default first.
    pub const ALL: [Language; 2] = [Language::Ta, Language::En];

    /// Parse a language code, ignoring ASCII case.
    pub fn parse(s: &str) -> Result<Self, InvalidLanguage> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ta" => Ok(Language::Ta),
            "en" => Ok(Language::En),
            _ => Err(InvalidLanguage {
                code: s.to_string(),
            }),
        }
    }

    /// The two-letter code, as used in field suffixes and the `lang` cookie.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ta => "ta",
            Language::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = InvalidLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
