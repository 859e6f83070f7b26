//! Locale selection, its persistence, and the translation seam.

pub mod locale;
pub mod store;
pub mod translate;

pub use locale::{Locale, UnknownLocale};
pub use store::{load_locale, save_locale, FileStore, MemoryStore, PreferenceStore, LANGUAGE_KEY};
pub use translate::{TranslationTable, Translator};
