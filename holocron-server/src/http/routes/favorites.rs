//! Favorite endpoints
//!
//! These act on behalf of the current user. With no session layer, the
//! current user is the first user row by insertion order; an empty users
//! table answers 404 rather than failing mid-handler.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use sqlx::PgPool;

use crate::db::repos::{Favorite, FavoriteRepo, User, UserRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::FavoriteTarget;

/// Favorite response. The tagged target is flattened back to the nullable
/// column pair that clients expect on the wire.
#[derive(Serialize)]
pub struct FavoriteResponse {
    pub id: i64,
    pub user_id: i64,
    pub people_id: Option<i64>,
    pub planet_id: Option<i64>,
}

impl From<Favorite> for FavoriteResponse {
    fn from(f: Favorite) -> Self {
        Self {
            id: f.id,
            user_id: f.user_id,
            people_id: f.target.people_id(),
            planet_id: f.target.planet_id(),
        }
    }
}

/// Acknowledgement body for favorite writes
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Resolve the current user: first user row by insertion order.
async fn current_user(pool: &PgPool) -> Result<User, ApiError> {
    UserRepo::new(pool)
        .first()
        .await?
        .ok_or(ApiError::NotFound {
            resource: "user",
            id: "current".into(),
        })
}

/// GET /users/favorites - list the current user's favorites
async fn list_favorites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FavoriteResponse>>, ApiError> {
    let user = current_user(&state.pool).await?;
    let favorites = FavoriteRepo::new(&state.pool).list_for_user(user.id).await?;

    Ok(Json(
        favorites.into_iter().map(FavoriteResponse::from).collect(),
    ))
}

/// POST /favorite/planet/{id} - add a planet to the current user's favorites
async fn add_favorite_planet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let user = current_user(&state.pool).await?;
    FavoriteRepo::new(&state.pool)
        .add(user.id, FavoriteTarget::Planet(id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Favorite planet added successfully",
        }),
    ))
}

/// POST /favorite/people/{id} - add a person to the current user's favorites
async fn add_favorite_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let user = current_user(&state.pool).await?;
    FavoriteRepo::new(&state.pool)
        .add(user.id, FavoriteTarget::Person(id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Favorite person added successfully",
        }),
    ))
}

/// DELETE /favorite/planet/{id} - remove a planet favorite
async fn remove_favorite_planet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = current_user(&state.pool).await?;
    FavoriteRepo::new(&state.pool)
        .remove(user.id, FavoriteTarget::Planet(id))
        .await?;

    Ok(Json(MessageResponse {
        message: "Favorite planet removed successfully",
    }))
}

/// DELETE /favorite/people/{id} - remove a person favorite
async fn remove_favorite_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = current_user(&state.pool).await?;
    FavoriteRepo::new(&state.pool)
        .remove(user.id, FavoriteTarget::Person(id))
        .await?;

    Ok(Json(MessageResponse {
        message: "Favorite person removed successfully",
    }))
}

/// Favorite routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/favorites", get(list_favorites))
        .route(
            "/favorite/planet/{id}",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/favorite/people/{id}",
            post(add_favorite_person).delete(remove_favorite_person),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planet_favorite_serializes_with_null_people_id() {
        let favorite = Favorite {
            id: 10,
            user_id: 1,
            target: FavoriteTarget::Planet(3),
        };
        let body = serde_json::to_value(FavoriteResponse::from(favorite)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "id": 10,
                "user_id": 1,
                "people_id": null,
                "planet_id": 3
            })
        );
    }

    #[test]
    fn person_favorite_serializes_with_null_planet_id() {
        let favorite = Favorite {
            id: 11,
            user_id: 1,
            target: FavoriteTarget::Person(5),
        };
        let body = serde_json::to_value(FavoriteResponse::from(favorite)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "id": 11,
                "user_id": 1,
                "people_id": 5,
                "planet_id": null
            })
        );
    }

    #[test]
    fn message_body_has_message_field() {
        let body = serde_json::to_value(MessageResponse {
            message: "Favorite planet added successfully",
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({"message": "Favorite planet added successfully"})
        );
    }
}
