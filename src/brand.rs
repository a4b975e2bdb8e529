//! Brand (tenant) configuration lookup.
//!
//! A missing brand is a normal state: every consumer falls back to its own
//! defaults, and no page fails because the backend could not be reached.

use crate::graphql::GraphqlClient;
use crate::metrics::ResolutionMetrics;
use crate::request::RequestContext;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

const BRAND_QUERY: &str = r#"query brand {
  brand {
    name
    settings {
      defaultLanguage
    }
    socmedSetting {
      facebookAppId
      instagramToken
      instagramUsername
    }
  }
}"#;

/// Tenant-level configuration for one storefront.
///
/// Fields the pages do not interpret are kept in `extra` and handed to the
/// renderer untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<BrandSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socmed_setting: Option<SocmedSetting>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocmedSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_username: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Brand {
    /// Brand-mandated locale, if configured and non-empty.
    pub fn default_language(&self) -> Option<&str> {
        self.settings
            .as_ref()
            .and_then(|s| s.default_language.as_deref())
            .filter(|lng| !lng.is_empty())
    }

    /// Whether the home page should show the Instagram feed.
    pub fn has_instagram_feed(&self) -> bool {
        self.socmed_setting
            .as_ref()
            .and_then(|s| s.instagram_token.as_deref())
            .is_some_and(|token| !token.is_empty())
    }
}

/// Source of brand configuration for a request.
#[async_trait]
pub trait BrandResolver: Send + Sync {
    /// `None` covers both "no brand configured" and "lookup failed".
    async fn resolve(&self, request: &RequestContext) -> Option<Brand>;
}

#[derive(Debug, Deserialize)]
struct BrandData {
    brand: Option<Brand>,
}

/// Brand lookup against the storefront GraphQL backend. One attempt, no retry.
pub struct GraphqlBrandResolver {
    client: GraphqlClient,
    metrics: Arc<ResolutionMetrics>,
}

impl GraphqlBrandResolver {
    pub fn new(client: GraphqlClient, metrics: Arc<ResolutionMetrics>) -> Self {
        Self { client, metrics }
    }
}

#[async_trait]
impl BrandResolver for GraphqlBrandResolver {
    async fn resolve(&self, request: &RequestContext) -> Option<Brand> {
        self.metrics.record_brand_fetch();

        match self
            .client
            .query::<BrandData>(BRAND_QUERY, serde_json::json!({}), request.host.as_deref())
            .await
        {
            Ok(BrandData { brand: Some(brand) }) => {
                debug!("Resolved brand {:?}", brand.name);
                Some(brand)
            }
            Ok(BrandData { brand: None }) => {
                warn!(
                    "No brand configured for host {:?}, using defaults",
                    request.host
                );
                self.metrics.record_brand_failure();
                None
            }
            Err(e) => {
                warn!("Brand lookup failed, using defaults: {}", e);
                self.metrics.record_brand_failure();
                None
            }
        }
    }
}

/// Resolver that always answers with the same brand. Useful for single-tenant
/// deployments and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticBrandResolver(pub Option<Brand>);

#[async_trait]
impl BrandResolver for StaticBrandResolver {
    async fn resolve(&self, _request: &RequestContext) -> Option<Brand> {
        self.0.clone()
    }
}
