//! Sitemap endpoint
//!
//! GET / lists every registered route so the API is discoverable without
//! external documentation. The table below is the single source for the
//! listing; new routes are added here when their router is merged.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Registered routes, as served by http::server.
const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/people"),
    ("GET", "/people/{id}"),
    ("GET", "/planets"),
    ("GET", "/planets/{id}"),
    ("GET", "/users"),
    ("GET", "/users/favorites"),
    ("POST", "/favorite/planet/{id}"),
    ("DELETE", "/favorite/planet/{id}"),
    ("POST", "/favorite/people/{id}"),
    ("DELETE", "/favorite/people/{id}"),
];

/// One sitemap entry
#[derive(Serialize)]
pub struct RouteEntry {
    pub method: &'static str,
    pub path: &'static str,
}

/// Sitemap response
#[derive(Serialize)]
pub struct SitemapResponse {
    pub endpoints: Vec<RouteEntry>,
}

/// GET / - list registered routes
async fn sitemap() -> Json<SitemapResponse> {
    Json(SitemapResponse {
        endpoints: ROUTES
            .iter()
            .map(|&(method, path)| RouteEntry { method, path })
            .collect(),
    })
}

/// Sitemap routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(sitemap))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sitemap_lists_every_route() {
        let Json(body) = sitemap().await;
        assert_eq!(body.endpoints.len(), ROUTES.len());
    }

    #[tokio::test]
    async fn sitemap_includes_favorite_endpoints() {
        let Json(body) = sitemap().await;
        let has = |method: &str, path: &str| {
            body.endpoints
                .iter()
                .any(|e| e.method == method && e.path == path)
        };

        assert!(has("POST", "/favorite/planet/{id}"));
        assert!(has("DELETE", "/favorite/people/{id}"));
        assert!(has("GET", "/users/favorites"));
    }
}
