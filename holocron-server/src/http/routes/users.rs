//! User endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// User response. The password is never part of this shape - the repository
/// does not even read it back.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            is_active: u.is_active,
        }
    }
}

/// GET /users - list all users
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/users", get(list_users))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_excludes_password() {
        let user = User {
            id: 1,
            email: "r2d2@example.com".into(),
            is_active: true,
        };
        let body = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({"id": 1, "email": "r2d2@example.com", "is_active": true})
        );
        assert!(body.get("password").is_none());
    }
}
