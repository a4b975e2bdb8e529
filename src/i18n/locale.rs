//! Effective locale resolution.

use crate::brand::Brand;
use crate::i18n::LocaleRegistry;

/// Resolve the locale a page renders in.
///
/// First non-empty source wins:
/// 1. the brand's configured default language (tenant policy),
/// 2. the `lng` path parameter (explicit navigation),
/// 3. the `ACTIVE_LNG` cookie (last known preference),
/// 4. the registry fallback ([`LocaleRegistry::fallback_code`]).
///
/// Pure function of its inputs and never empty.
pub fn resolve_locale(
    brand: Option<&Brand>,
    path_lng: Option<&str>,
    cookie_lng: Option<&str>,
) -> String {
    brand
        .and_then(Brand::default_language)
        .or_else(|| non_empty(path_lng))
        .or_else(|| non_empty(cookie_lng))
        .unwrap_or_else(|| LocaleRegistry::get().fallback_code())
        .to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::BrandSettings;
    use proptest::prelude::*;

    fn brand_with_language(lng: Option<&str>) -> Brand {
        Brand {
            settings: Some(BrandSettings {
                default_language: lng.map(String::from),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_brand_language_wins() {
        let brand = brand_with_language(Some("en"));
        assert_eq!(resolve_locale(Some(&brand), Some("id"), Some("id")), "en");
    }

    #[test]
    fn test_path_beats_cookie() {
        assert_eq!(resolve_locale(None, Some("en"), Some("id")), "en");
    }

    #[test]
    fn test_cookie_when_no_brand_or_path() {
        assert_eq!(resolve_locale(None, None, Some("en")), "en");
    }

    #[test]
    fn test_fallback_when_nothing_set() {
        assert_eq!(resolve_locale(None, None, None), "id");
    }

    #[test]
    fn test_brand_without_language_is_skipped() {
        let brand = brand_with_language(None);
        assert_eq!(resolve_locale(Some(&brand), None, Some("en")), "en");

        let brand = Brand::default();
        assert_eq!(resolve_locale(Some(&brand), Some("en"), None), "en");
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let brand = brand_with_language(Some(""));
        assert_eq!(resolve_locale(Some(&brand), Some(""), Some("")), "id");
        assert_eq!(resolve_locale(None, Some(""), Some("en")), "en");
    }

    proptest! {
        #[test]
        fn prop_brand_language_always_wins(
            brand_lng in "[a-z]{2}",
            path in proptest::option::of("[a-z]{0,8}"),
            cookie in proptest::option::of("[a-z]{0,8}"),
        ) {
            let brand = brand_with_language(Some(&brand_lng));
            let resolved = resolve_locale(Some(&brand), path.as_deref(), cookie.as_deref());
            prop_assert_eq!(resolved, brand_lng);
        }

        #[test]
        fn prop_never_empty(
            brand_lng in proptest::option::of("[a-z]{0,3}"),
            path in proptest::option::of("[a-z.]{0,8}"),
            cookie in proptest::option::of("[a-z]{0,8}"),
        ) {
            let brand = brand_with_language(brand_lng.as_deref());
            let resolved = resolve_locale(Some(&brand), path.as_deref(), cookie.as_deref());
            prop_assert!(!resolved.is_empty());
        }

        #[test]
        fn prop_idempotent(
            path in proptest::option::of("[a-z]{0,8}"),
            cookie in proptest::option::of("[a-z]{0,8}"),
        ) {
            let first = resolve_locale(None, path.as_deref(), cookie.as_deref());
            let second = resolve_locale(None, path.as_deref(), cookie.as_deref());
            prop_assert_eq!(first, second);
        }
    }
}
