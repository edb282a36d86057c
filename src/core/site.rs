//! HTTP routes served next to the Leptos app
//!
//! - `GET /`        - redirect to the default edition (`/{slug}`)
//! - `GET /healthz` - liveness check listing the loaded editions

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Redirect},
    routing::get,
};
use serde::Serialize;

use super::catalog::EditionCatalog;
use super::config::Config;

/// Shared state for the site routes
#[derive(Clone, Debug)]
pub struct SiteState {
    /// Slug of the edition served at `/`
    pub default_slug: Arc<str>,
    /// All edition slugs, newest first
    pub editions: Arc<[String]>,
}

impl SiteState {
    pub fn new(config: &Config, catalog: &EditionCatalog) -> Self {
        Self {
            default_slug: Arc::from(config.resolve_edition(catalog).slug.as_str()),
            editions: catalog.iter().map(|e| e.slug.clone()).collect(),
        }
    }

    pub fn default_path(&self) -> String {
        format!("/{}", self.default_slug)
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub default_edition: String,
    pub editions: Vec<String>,
}

/// Create the site router
pub fn site_router(state: SiteState) -> Router {
    Router::new()
        .route("/", get(redirect_to_default))
        .route("/healthz", get(health))
        .with_state(state)
}

/// GET /
async fn redirect_to_default(State(state): State<SiteState>) -> impl IntoResponse {
    let target = state.default_path();
    tracing::debug!("redirecting / to {}", target);
    Redirect::temporary(&target)
}

/// GET /healthz
async fn health(State(state): State<SiteState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        default_edition: state.default_slug.to_string(),
        editions: state.editions.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};

    fn state(default: Option<&str>) -> SiteState {
        let catalog = EditionCatalog::embedded().expect("embedded content should load");
        let config = Config {
            default_edition: default.map(str::to_string),
            log_filter: "info".to_string(),
        };
        SiteState::new(&config, catalog)
    }

    #[test]
    fn test_state_lists_editions_newest_first() {
        let state = state(None);
        assert_eq!(&*state.default_slug, "2025");
        assert_eq!(state.editions.to_vec(), vec!["2025", "2024"]);
    }

    #[tokio::test]
    async fn test_root_redirects_to_default_edition() {
        let response = redirect_to_default(State(state(Some("2024"))))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/2024"
        );
    }

    #[tokio::test]
    async fn test_unknown_default_falls_back_to_latest() {
        let response = redirect_to_default(State(state(Some("1999"))))
            .await
            .into_response();

        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/2025"
        );
    }

    #[tokio::test]
    async fn test_health_reports_editions() {
        let Json(body) = health(State(state(None))).await;

        assert_eq!(body.status, "ok");
        assert_eq!(body.default_edition, "2025");
        assert_eq!(body.editions.len(), 2);
    }
}
