use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Languages the service deals with.
///
/// The synthesis path spells numerals out in English and translates the
/// spelled-out words into Kinyarwanda before handing the text to the
/// synthesizer; French and Swahili are carried for regional providers that
/// support them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "rw")]
    Kinyarwanda,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "sw")]
    Swahili,
}

impl Language {
    /// ISO 639-1 code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Kinyarwanda => "rw",
            Language::French => "fr",
            Language::Swahili => "sw",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" | "eng" | "english" => Ok(Language::English),
            "rw" | "kin" | "kinyarwanda" => Ok(Language::Kinyarwanda),
            "fr" | "fra" | "french" => Ok(Language::French),
            "sw" | "swa" | "swahili" => Ok(Language::Swahili),
            other => Err(CoreError::UnknownLanguage(other.to_string())),
        }
    }
}
