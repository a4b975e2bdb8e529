//! Per-request context extracted before any page logic runs.

use crate::cookies::CookieBag;
use crate::redirect::is_non_locale_segment;
use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::{header, request::Parts},
};
use percent_encoding::percent_decode_str;
use std::collections::HashMap;
use tracing::debug;

/// Path parameter holding the locale segment (`/:lng/...`).
pub const LNG_PARAM: &str = "lng";

/// What page orchestration needs to know about the incoming request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Host the storefront was requested on, forwarded to the brand backend.
    pub host: Option<String>,
    /// Raw `lng` path segment, exactly as routed (may not be a locale at all).
    pub lng: Option<String>,
    pub cookies: CookieBag,
}

impl RequestContext {
    pub fn lng(&self) -> Option<&str> {
        self.lng.as_deref().filter(|v| !v.is_empty())
    }

    /// The `lng` segment as a locale source. Routed non-locale paths
    /// (`graphql`, `favicon.ico`) are not a locale choice; anything else is
    /// taken as-is, registered or not.
    pub fn locale_segment(&self) -> Option<&str> {
        self.lng().filter(|segment| !is_non_locale_segment(segment))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let lng = match Path::<HashMap<String, String>>::from_request_parts(parts, state).await {
            Ok(Path(mut params)) => params.remove(LNG_PARAM),
            // A routed segment that is not valid UTF-8 once decoded
            Err(PathRejection::FailedToDeserializePathParams(e)) => {
                debug!("Undecodable path params ({}), using raw segment", e);
                first_segment_lossy(parts.uri.path())
            }
            Err(_) => None,
        };

        Ok(RequestContext {
            host,
            lng,
            cookies: CookieBag::from_headers(&parts.headers),
        })
    }
}

fn first_segment_lossy(path: &str) -> Option<String> {
    let raw = path.trim_start_matches('/').split('/').next()?;
    let decoded = percent_decode_str(raw).decode_utf8_lossy().into_owned();
    Some(decoded).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lng_filters_empty_segment() {
        let ctx = RequestContext {
            lng: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(ctx.lng(), None);

        let ctx = RequestContext {
            lng: Some("en".to_string()),
            ..Default::default()
        };
        assert_eq!(ctx.lng(), Some("en"));
    }

    #[test]
    fn test_locale_segment_skips_only_non_locale_paths() {
        let with = |segment: &str| RequestContext {
            lng: Some(segment.to_string()),
            ..Default::default()
        };
        assert_eq!(with("id").locale_segment(), Some("id"));
        assert_eq!(with("en").locale_segment(), Some("en"));
        assert_eq!(with("fr").locale_segment(), Some("fr"));
        assert_eq!(with("xyz").locale_segment(), Some("xyz"));
        assert_eq!(with("favicon.ico").locale_segment(), None);
        assert_eq!(with("graphql").locale_segment(), None);
        assert_eq!(RequestContext::default().locale_segment(), None);
    }

    #[test]
    fn test_first_segment_lossy() {
        assert_eq!(first_segment_lossy("/%FF/cart").as_deref(), Some("\u{FFFD}"));
        assert_eq!(first_segment_lossy("/ku%C3%A9").as_deref(), Some("kué"));
        assert_eq!(first_segment_lossy("/"), None);
    }

    #[tokio::test]
    async fn test_extracts_host_and_cookies_without_route_params() {
        let request = axum::http::Request::builder()
            .uri("/anything")
            .header(header::HOST, "shop.example.com")
            .header(header::COOKIE, "ACTIVE_LNG=en")
            .body(())
            .expect("request");
        let (mut parts, ()) = request.into_parts();

        let ctx = RequestContext::from_request_parts(&mut parts, &())
            .await
            .expect("infallible");
        assert_eq!(ctx.host.as_deref(), Some("shop.example.com"));
        assert_eq!(ctx.cookies.active_lng(), Some("en"));
        // No matched route means no path params
        assert_eq!(ctx.lng(), None);
    }
}
