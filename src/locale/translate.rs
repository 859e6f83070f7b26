//! Translation lookup seam.
//!
//! The core hands out semantic keys only. A `Translator` owned by the
//! presentation layer turns key + locale into display text.

use rustc_hash::FxHashMap;

use super::locale::Locale;

/// Maps semantic keys to display text.
pub trait Translator {
    /// Text for `key` in `locale`, if known.
    fn lookup(&self, key: &str, locale: Locale) -> Option<&str>;

    /// Text for `key` in `locale`, or the key itself when missing.
    fn translate<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
        self.lookup(key, locale).unwrap_or(key)
    }
}

/// Translator over caller-supplied entries.
#[derive(Clone, Debug, Default)]
pub struct TranslationTable {
    entries: FxHashMap<String, FxHashMap<Locale, String>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, locale: Locale, text: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .insert(locale, text.into());
    }

    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, locale: Locale, text: impl Into<String>) -> Self {
        self.insert(key, locale, text);
        self
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for TranslationTable {
    fn lookup(&self, key: &str, locale: Locale) -> Option<&str> {
        self.entries.get(key)?.get(&locale).map(String::as_str)
    }
}
