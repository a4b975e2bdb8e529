//! Page resolution metrics.
//!
//! Counts backend fetches, degraded fallbacks and redirects so the "always
//! render something" policy stays observable: a page that silently renders
//! without a brand looks healthy from the outside.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared counters, one instance per running server.
#[derive(Debug, Default)]
pub struct ResolutionMetrics {
    /// Brand lookups attempted against the backend
    brand_fetches: AtomicUsize,

    /// Brand lookups that degraded to "no brand"
    brand_failures: AtomicUsize,

    /// Banner lookups attempted against the backend
    banner_fetches: AtomicUsize,

    /// Banner lookups that degraded to "no banners"
    banner_failures: AtomicUsize,

    /// Dictionary lookups answered with the empty fallback
    dictionary_fallbacks: AtomicUsize,

    /// Redirects issued by the production root-redirect policy
    root_redirects: AtomicUsize,

    /// Redirects issued for unrecognized locale segments
    locale_redirects: AtomicUsize,

    /// Pages that produced render props
    renders: AtomicUsize,
}

impl ResolutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_brand_fetch(&self) {
        self.brand_fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_brand_failure(&self) {
        self.brand_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_banner_fetch(&self) {
        self.banner_fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_banner_failure(&self) {
        self.banner_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dictionary_fallback(&self) {
        self.dictionary_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_root_redirect(&self) {
        self.root_redirects.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_locale_redirect(&self) {
        self.locale_redirects.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_render(&self) {
        self.renders.fetch_add(1, Ordering::Relaxed);
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let brand_fetches = self.brand_fetches.load(Ordering::Relaxed);
        let brand_failures = self.brand_failures.load(Ordering::Relaxed);
        let brand_success_rate = if brand_fetches > 0 {
            (brand_fetches.saturating_sub(brand_failures) as f64 / brand_fetches as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            brand_fetches,
            brand_failures,
            brand_success_rate,
            banner_fetches: self.banner_fetches.load(Ordering::Relaxed),
            banner_failures: self.banner_failures.load(Ordering::Relaxed),
            dictionary_fallbacks: self.dictionary_fallbacks.load(Ordering::Relaxed),
            root_redirects: self.root_redirects.load(Ordering::Relaxed),
            locale_redirects: self.locale_redirects.load(Ordering::Relaxed),
            renders: self.renders.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of [`ResolutionMetrics`], served at `/metrics`.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub brand_fetches: usize,
    pub brand_failures: usize,

    /// Brand success rate as a percentage (0-100)
    pub brand_success_rate: f64,

    pub banner_fetches: usize,
    pub banner_failures: usize,
    pub dictionary_fallbacks: usize,
    pub root_redirects: usize,
    pub locale_redirects: usize,
    pub renders: usize,
}
