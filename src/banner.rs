//! Home page banner prefetch.

use crate::graphql::GraphqlClient;
use crate::metrics::ResolutionMetrics;
use crate::request::RequestContext;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

const BANNERS_QUERY: &str = r#"query banners {
  banners {
    title
    imageURL
    linkURL
    sequence
  }
}"#;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "linkURL", default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
}

/// Banner payload as the home page renderer expects it (`dataBanners.data`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerList {
    pub data: Vec<Banner>,
}

#[async_trait]
pub trait BannerLoader: Send + Sync {
    /// `None` when banners could not be fetched.
    async fn fetch(&self, request: &RequestContext) -> Option<BannerList>;
}

#[derive(Debug, Deserialize)]
struct BannersData {
    #[serde(default)]
    banners: Option<Vec<Banner>>,
}

pub struct GraphqlBannerLoader {
    client: GraphqlClient,
    metrics: Arc<ResolutionMetrics>,
}

impl GraphqlBannerLoader {
    pub fn new(client: GraphqlClient, metrics: Arc<ResolutionMetrics>) -> Self {
        Self { client, metrics }
    }
}

#[async_trait]
impl BannerLoader for GraphqlBannerLoader {
    async fn fetch(&self, request: &RequestContext) -> Option<BannerList> {
        self.metrics.record_banner_fetch();

        match self
            .client
            .query::<BannersData>(BANNERS_QUERY, serde_json::json!({}), request.host.as_deref())
            .await
        {
            Ok(data) => {
                let mut banners = data.banners.unwrap_or_default();
                // Renderer shows them in carousel order
                banners.sort_by_key(|b| b.sequence.unwrap_or(i64::MAX));
                debug!("Fetched {} banners", banners.len());
                Some(BannerList { data: banners })
            }
            Err(e) => {
                warn!("Banner fetch failed, rendering without banners: {}", e);
                self.metrics.record_banner_failure();
                None
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticBannerLoader(pub Option<BannerList>);

#[async_trait]
impl BannerLoader for StaticBannerLoader {
    async fn fetch(&self, _request: &RequestContext) -> Option<BannerList> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        matchers::{body_string_contains, method},
        Mock, MockServer, ResponseTemplate,
    };

    fn loader_for(server: &MockServer, metrics: Arc<ResolutionMetrics>) -> GraphqlBannerLoader {
        let client = GraphqlClient::new(format!("{}/graphql", server.uri()), Duration::from_secs(5))
            .expect("client");
        GraphqlBannerLoader::new(client, metrics)
    }

    #[tokio::test]
    async fn test_fetch_sorts_by_sequence() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("banners"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "banners": [
                    { "title": "Second", "imageURL": "https://cdn/2.jpg", "sequence": 2 },
                    { "title": "Unordered" },
                    { "title": "First", "imageURL": "https://cdn/1.jpg", "linkURL": "/sale", "sequence": 1 }
                ] }
            })))
            .mount(&server)
            .await;

        let metrics = Arc::new(ResolutionMetrics::new());
        let list = loader_for(&server, metrics.clone())
            .fetch(&RequestContext::default())
            .await
            .expect("banners");

        let titles: Vec<_> = list.data.iter().filter_map(|b| b.title.as_deref()).collect();
        assert_eq!(titles, vec!["First", "Second", "Unordered"]);
        assert_eq!(list.data[0].link_url.as_deref(), Some("/sale"));
        assert_eq!(metrics.report().banner_fetches, 1);
        assert_eq!(metrics.report().banner_failures, 0);
    }

    #[tokio::test]
    async fn test_fetch_null_banners_is_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "banners": null } })),
            )
            .mount(&server)
            .await;

        let list = loader_for(&server, Arc::new(ResolutionMetrics::new()))
            .fetch(&RequestContext::default())
            .await
            .expect("banners");
        assert!(list.data.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let metrics = Arc::new(ResolutionMetrics::new());
        let list = loader_for(&server, metrics.clone())
            .fetch(&RequestContext::default())
            .await;
        assert!(list.is_none());
        assert_eq!(metrics.report().banner_failures, 1);
    }

    #[test]
    fn test_banner_wire_names() {
        let banner = Banner {
            title: Some("Sale".to_string()),
            image_url: Some("https://cdn/sale.jpg".to_string()),
            link_url: None,
            sequence: Some(1),
        };
        let json = serde_json::to_value(BannerList { data: vec![banner] }).expect("serialize");
        assert_eq!(
            json,
            json!({ "data": [{ "title": "Sale", "imageURL": "https://cdn/sale.jpg", "sequence": 1 }] })
        );
    }
}
