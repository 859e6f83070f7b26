//! Supported display locales.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Locale code not in the supported set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown locale code {0:?}")]
pub struct UnknownLocale(pub String);

/// Display locale. Romanian is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ro,
    En,
    Hu,
    De,
    Es,
    Fr,
    It,
    Ru,
}

impl Locale {
    pub const ALL: [Locale; 8] = [
        Locale::Ro,
        Locale::En,
        Locale::Hu,
        Locale::De,
        Locale::Es,
        Locale::Fr,
        Locale::It,
        Locale::Ru,
    ];

    /// Two-letter code, as persisted.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Locale::Ro => "ro",
            Locale::En => "en",
            Locale::Hu => "hu",
            Locale::De => "de",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::It => "it",
            Locale::Ru => "ru",
        }
    }

    /// Translation key for the language's own name.
    #[must_use]
    pub fn name_key(self) -> String {
        format!("language_{}", self.code())
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}
