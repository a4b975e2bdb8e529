//! Internationalization (i18n) for storefront pages.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales
//! - `locale`: Effective locale resolution (brand, path, cookie, fallback)
//! - `dictionary`: Startup-loaded translation tables keyed by locale code
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_pages::i18n::{resolve_locale, DictionaryStore};
//!
//! let store = DictionaryStore::load_dir(Path::new("locales"));
//! let lng = resolve_locale(brand.as_ref(), Some("en"), cookies.active_lng());
//! let dictionary = store.load(&lng);
//! ```

mod dictionary;
mod locale;
mod registry;

pub use dictionary::{load_dictionary_file, Dictionary, DictionaryError, DictionaryStore};
pub use locale::resolve_locale;
pub use registry::{LocaleConfig, LocaleRegistry, FALLBACK_LOCALE};
