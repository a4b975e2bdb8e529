//! Locale registry: Single source of truth for all supported storefront locales.
//!
//! This module provides a centralized registry of every locale the storefront
//! ships a dictionary for, plus the fallback used when nothing else resolves.
//! It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use std::sync::OnceLock;

/// Locale used when neither brand, path nor cookie supplies one.
pub const FALLBACK_LOCALE: &str = "id";

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "id", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Indonesian", "English")
    pub name: &'static str,

    /// Whether this locale is enabled for use
    pub enabled: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    fallback: &'static str,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
            fallback: FALLBACK_LOCALE,
        })
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Code of the locale pages fall back to.
    pub fn fallback_code(&self) -> &'static str {
        self.fallback
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations: Indonesian and English.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "id",
            name: "Indonesian",
            enabled: true,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            enabled: true,
        },
    ]
}
