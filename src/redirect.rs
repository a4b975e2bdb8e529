//! Redirect decisions taken before a page renders.
//!
//! Both policies only decide; building the response is [`redirect_response`].
//! A handler that gets a location back must return the redirect immediately.

use crate::cookies::CookieBag;
use crate::i18n::LocaleRegistry;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::error;

/// First path segments the home route accepts as-is. Anything else captured in
/// the locale slot is a misrouted path.
pub const ALLOWED_LNG_SEGMENTS: [&str; 4] = ["en", "id", "graphql", "favicon.ico"];

/// Allow-listed segments that are routed paths rather than locale choices.
pub const NON_LOCALE_SEGMENTS: [&str; 2] = ["graphql", "favicon.ico"];

/// Bytes escaped when a value becomes one path segment of a `Location`.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Production root-redirect: send the visitor to their localized home.
///
/// Returns the `Location` when production mode is on, `None` otherwise.
pub fn root_redirect(is_production: bool, cookies: &CookieBag) -> Option<String> {
    if !is_production {
        return None;
    }
    let lng = cookies
        .active_lng()
        .unwrap_or(LocaleRegistry::get().fallback_code());
    Some(format!("/{}", utf8_percent_encode(lng, PATH_SEGMENT)))
}

pub fn is_allowed_lng_segment(segment: &str) -> bool {
    ALLOWED_LNG_SEGMENTS.contains(&segment)
}

pub fn is_non_locale_segment(segment: &str) -> bool {
    NON_LOCALE_SEGMENTS.contains(&segment)
}

/// Locale-validity redirect: re-home an unrecognized `lng` segment under the
/// resolved locale (`/xyz` becomes `/<locale>/xyz`). An empty segment has
/// nothing to re-home and never redirects.
pub fn locale_redirect(lng_segment: &str, resolved_locale: &str) -> Option<String> {
    if lng_segment.is_empty() || is_allowed_lng_segment(lng_segment) {
        return None;
    }
    Some(format!(
        "/{}/{}",
        utf8_percent_encode(resolved_locale, PATH_SEGMENT),
        utf8_percent_encode(lng_segment, PATH_SEGMENT)
    ))
}

/// 307 Temporary Redirect with an empty body.
pub fn redirect_response(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, value)]).into_response(),
        Err(e) => {
            // Unreachable for locations built above: controls are escaped
            error!("Invalid redirect location {:?}: {}", location, e);
            (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, HeaderValue::from_static("/"))])
                .into_response()
        }
    }
}
