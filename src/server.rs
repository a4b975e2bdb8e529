//! Shared state and HTTP routes.

use crate::banner::{BannerLoader, GraphqlBannerLoader};
use crate::brand::{BrandResolver, GraphqlBrandResolver};
use crate::config::Config;
use crate::graphql::GraphqlClient;
use crate::i18n::DictionaryStore;
use crate::metrics::{MetricsReport, ResolutionMetrics};
use crate::pages::{cart_page, home_page};
use anyhow::{Context, Result};
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{normalize_path::NormalizePath, trace::TraceLayer};
use tracing::info;

/// Everything a page handler needs. Cloned per request; all members are shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub brands: Arc<dyn BrandResolver>,
    pub banners: Arc<dyn BannerLoader>,
    pub dictionaries: Arc<DictionaryStore>,
    pub metrics: Arc<ResolutionMetrics>,
}

impl AppState {
    /// Wire the GraphQL backends and load dictionaries from `config.locales_dir`.
    pub fn from_config(config: Config) -> Result<Self> {
        let metrics = Arc::new(ResolutionMetrics::new());
        let client = GraphqlClient::new(config.graphql_uri.clone(), config.backend_timeout)
            .context("Failed to build backend HTTP client")?;

        let dictionaries = DictionaryStore::load_dir(&config.locales_dir);
        info!(
            "Dictionaries ready for {:?} from {}",
            dictionaries.locales(),
            config.locales_dir.display()
        );

        Ok(Self {
            brands: Arc::new(GraphqlBrandResolver::new(client.clone(), Arc::clone(&metrics))),
            banners: Arc::new(GraphqlBannerLoader::new(client, Arc::clone(&metrics))),
            dictionaries: Arc::new(dictionaries),
            config: Arc::new(config),
            metrics,
        })
    }
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn metrics(State(state): State<AppState>) -> Json<MetricsReport> {
    Json(state.metrics.report())
}

/// Page routes plus `/health` and `/metrics`.
///
/// Trailing slashes are trimmed before routing, so `/en/` is `/en`.
pub fn router(state: AppState) -> NormalizePath<Router> {
    let routes = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/:lng", get(home_page))
        .route("/:lng/cart", get(cart_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    NormalizePath::trim_trailing_slash(routes)
}
