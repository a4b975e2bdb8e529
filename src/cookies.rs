//! Request cookie parsing.

use axum::http::{header, HeaderMap};
use percent_encoding::percent_decode_str;
use std::collections::HashMap;

/// Cookie holding the visitor's last chosen locale.
pub const ACTIVE_LNG: &str = "ACTIVE_LNG";

/// Key-value view of a request's `Cookie` header(s). Read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieBag {
    values: HashMap<String, String>,
}

impl CookieBag {
    /// Parse a single `Cookie` header value (`a=1; b=2`).
    ///
    /// Values are percent-decoded (invalid UTF-8 is replaced, not rejected).
    /// Pairs without `=` or with an empty name are skipped. When a name repeats,
    /// the first occurrence wins, matching how browsers order the most specific
    /// cookie first.
    pub fn parse(header: &str) -> Self {
        let mut bag = Self::default();
        bag.extend_from(header);
        bag
    }

    /// Collect every `Cookie` header of a request.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut bag = Self::default();
        for value in headers.get_all(header::COOKIE) {
            if let Ok(raw) = value.to_str() {
                bag.extend_from(raw);
            }
        }
        bag
    }

    fn extend_from(&mut self, header: &str) {
        for pair in header.split(';') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let value = value.trim().trim_matches('"');
            self.values
                .entry(name.to_string())
                .or_insert_with(|| percent_decode_str(value).decode_utf8_lossy().into_owned());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// The `ACTIVE_LNG` cookie, if present and non-empty.
    pub fn active_lng(&self) -> Option<&str> {
        self.get(ACTIVE_LNG).filter(|v| !v.is_empty())
    }
}
