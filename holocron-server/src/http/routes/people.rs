//! People endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::{PeopleRepo, Person};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Person response
#[derive(Serialize)]
pub struct PersonResponse {
    pub id: i64,
    pub name: String,
}

impl From<Person> for PersonResponse {
    fn from(p: Person) -> Self {
        Self {
            id: p.id,
            name: p.name,
        }
    }
}

/// GET /people - list all people
async fn list_people(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PersonResponse>>, ApiError> {
    let people = PeopleRepo::new(&state.pool).list().await?;
    Ok(Json(people.into_iter().map(PersonResponse::from).collect()))
}

/// GET /people/{id} - get a single person
async fn get_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<PersonResponse>, ApiError> {
    let person = PeopleRepo::new(&state.pool).get(id).await?;
    Ok(Json(PersonResponse::from(person)))
}

/// People routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/{id}", get(get_person))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_reproduces_visible_fields() {
        let person = Person {
            id: 4,
            name: "Obi-Wan Kenobi".into(),
        };
        let body = serde_json::to_value(PersonResponse::from(person)).unwrap();
        assert_eq!(body, serde_json::json!({"id": 4, "name": "Obi-Wan Kenobi"}));
    }
}
