//! Hero CRUD handlers.
//!
//! Path identifiers are parsed as UUIDs and request bodies are validated
//! before anything reaches the service. Missing records become 404s here.

use axum::{
    body::Body,
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures_util::{stream, StreamExt, TryStreamExt};
use uuid::Uuid;

use heroes_core::hero::{Hero, HeroRequest};
use heroes_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// Content type of the streamed listing.
pub const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// Unwraps and validates a hero request body.
fn valid_request(body: Result<Json<HeroRequest>, JsonRejection>) -> Result<HeroRequest, AppError> {
    let Json(request) = body?;
    request.validate()?;
    Ok(request)
}

/// Encodes one hero as a newline-terminated JSON line.
fn ndjson_line(hero: &Hero) -> Result<Vec<u8>, RepositoryError> {
    let mut line =
        serde_json::to_vec(hero).map_err(|e| RepositoryError::Serialization(e.to_string()))?;
    line.push(b'\n');
    Ok(line)
}

/// List all heroes (GET /api/v1/heroes).
pub async fn list_heroes(State(state): State<AppState>) -> Result<Json<Vec<Hero>>, AppError> {
    tracing::info!("Requesting the list of all heroes");

    let heroes: Vec<Hero> = state.heroes.list_heroes().try_collect().await?;

    Ok(Json(heroes))
}

/// Stream all heroes as newline-delimited JSON (GET /api/v1/heroes/items).
///
/// The first record is pulled before the response starts, so a backend that
/// fails up front is reported with an error status instead of a truncated
/// 200. Later records are pulled only as the body is written, and a client
/// disconnect drops the underlying scan.
pub async fn stream_heroes(State(state): State<AppState>) -> Result<Response, AppError> {
    tracing::info!("Requesting list stream of all heroes");

    let mut heroes = state.heroes.list_heroes();
    let first = heroes.next().await.transpose()?;

    let lines = stream::iter(first.map(Ok))
        .chain(heroes)
        .map(|result| {
            let line = result.and_then(|hero| ndjson_line(&hero));
            if let Err(err) = &line {
                tracing::error!(error = %err, "Hero stream aborted");
            }
            line
        });

    Ok((
        [(header::CONTENT_TYPE, NDJSON_CONTENT_TYPE)],
        Body::from_stream(lines),
    )
        .into_response())
}

/// Get a single hero by ID (GET /api/v1/heroes/{id}).
pub async fn get_hero(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Hero>, AppError> {
    let Path(id) = path?;
    tracing::info!(hero_id = %id, "Requesting the hero");

    let id = id.to_string();
    match state.heroes.find_by_id(&id).await? {
        Some(hero) => Ok(Json(hero)),
        None => Err(RepositoryError::hero_not_found(id).into()),
    }
}

/// Create a new hero (POST /api/v1/heroes).
pub async fn create_hero(
    State(state): State<AppState>,
    body: Result<Json<HeroRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = valid_request(body)?;
    tracing::info!("Creating a new hero");

    let hero = state.heroes.create(request).await?;

    tracing::debug!(hero_id = %hero.id, name = %hero.name, "Created new hero");

    Ok((StatusCode::CREATED, Json(hero)))
}

/// Create the hero with the given ID, overwriting it if it exists
/// (POST /api/v1/heroes/{id}).
pub async fn force_create_hero(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<HeroRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let request = valid_request(body)?;
    tracing::info!(hero_id = %id, "Creating hero with id");

    let hero = state.heroes.force_create(&id.to_string(), request).await?;

    Ok((StatusCode::CREATED, Json(hero)))
}

/// Replace a hero by ID (PUT /api/v1/heroes/{id}).
pub async fn update_hero(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<HeroRequest>, JsonRejection>,
) -> Result<Json<Hero>, AppError> {
    let Path(id) = path?;
    let request = valid_request(body)?;
    tracing::info!(hero_id = %id, "Updating the hero");

    let id = id.to_string();
    match state.heroes.update(&id, request).await? {
        Some(hero) => Ok(Json(hero)),
        None => Err(RepositoryError::hero_not_found(id).into()),
    }
}

/// Delete a hero by ID (DELETE /api/v1/heroes/{id}).
pub async fn delete_hero(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    tracing::info!(hero_id = %id, "Deleting the hero");

    let id = id.to_string();
    match state.heroes.delete_by_id(&id).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(RepositoryError::hero_not_found(id).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndjson_line_is_newline_terminated_json() {
        let hero = Hero::new("1", "Sonic", "Sonic", 1);

        let line = ndjson_line(&hero).unwrap();

        assert_eq!(
            String::from_utf8(line).unwrap(),
            "{\"id\":\"1\",\"name\":\"Sonic\",\"universe\":\"Sonic\",\"films\":1}\n"
        );
    }
}
