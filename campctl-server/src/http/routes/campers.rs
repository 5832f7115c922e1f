//! Camper endpoints

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::db::repos::{CamperRepo, SignupRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{CamperResource, JsonBody, ValidId};
use crate::http::server::AppState;
use crate::http::views::{CamperDetailView, CamperView};
use crate::models::{CamperPatch, NewCamper, ValidationError};

/// Create camper request
#[derive(Deserialize)]
pub struct CreateCamperRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// GET /campers - list all campers
async fn list_campers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CamperView>>, ApiError> {
    let mut tx = state.pool.begin().await?;
    let campers = CamperRepo::new(&mut *tx).list().await?;
    tx.commit().await?;

    Ok(Json(campers.into_iter().map(CamperView::from).collect()))
}

/// POST /campers - create a camper
async fn create_camper(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateCamperRequest>,
) -> Result<(StatusCode, Json<CamperView>), ApiError> {
    let camper = NewCamper::new(req.name.as_deref(), req.age)?;

    let mut tx = state.pool.begin().await?;
    let created = CamperRepo::new(&mut *tx).create(camper).await?;
    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(CamperView::from(created))))
}

/// GET /campers/{id} - camper with signups and their activities
async fn get_camper(
    State(state): State<Arc<AppState>>,
    id: ValidId<CamperResource>,
) -> Result<Json<CamperDetailView>, ApiError> {
    let mut tx = state.pool.begin().await?;
    let camper = CamperRepo::new(&mut *tx).get(id.get()).await?;
    let signups = SignupRepo::new(&mut *tx).list_for_camper(camper.id).await?;
    tx.commit().await?;

    Ok(Json(CamperDetailView::new(camper, signups)))
}

/// PATCH /campers/{id} - update name and/or age
///
/// Existence is checked before the body is looked at, so a missing camper
/// is always a 404.
async fn update_camper(
    State(state): State<Arc<AppState>>,
    id: ValidId<CamperResource>,
    body: Bytes,
) -> Result<(StatusCode, Json<CamperView>), ApiError> {
    let mut tx = state.pool.begin().await?;
    let camper = CamperRepo::new(&mut *tx).get(id.get()).await?;

    let fields: Value = serde_json::from_slice(&body).map_err(|e| {
        ValidationError::MalformedBody {
            reason: e.to_string(),
        }
    })?;
    let fields = fields.as_object().ok_or(ValidationError::WrongType {
        field: "body",
        expected: "a JSON object",
    })?;
    let patch = CamperPatch::from_fields(fields)?;

    let updated = CamperRepo::new(&mut *tx).update(camper.id, &patch).await?;
    tx.commit().await?;

    Ok((StatusCode::ACCEPTED, Json(CamperView::from(updated))))
}

/// Camper routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/campers", get(list_campers).post(create_camper))
        .route("/campers/{id}", get(get_camper).patch(update_camper))
}
