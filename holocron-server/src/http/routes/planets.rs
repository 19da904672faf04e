//! Planet endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::{Planet, PlanetRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Planet response
#[derive(Serialize)]
pub struct PlanetResponse {
    pub id: i64,
    pub name: String,
}

impl From<Planet> for PlanetResponse {
    fn from(p: Planet) -> Self {
        Self {
            id: p.id,
            name: p.name,
        }
    }
}

/// GET /planets - list all planets
async fn list_planets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlanetResponse>>, ApiError> {
    let planets = PlanetRepo::new(&state.pool).list().await?;
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

/// GET /planets/{id} - get a single planet
async fn get_planet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<PlanetResponse>, ApiError> {
    let planet = PlanetRepo::new(&state.pool).get(id).await?;
    Ok(Json(PlanetResponse::from(planet)))
}

/// Planet routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/planets", get(list_planets))
        .route("/planets/{id}", get(get_planet))
}
