//! Signup endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;

use crate::db::repos::{CamperRepo, SignupRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::http::views::SignupCreatedView;
use crate::models::NewSignup;

/// Create signup request
#[derive(Deserialize)]
pub struct CreateSignupRequest {
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
    pub time: Option<i64>,
}

/// POST /signups - sign a camper up for an activity
async fn create_signup(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateSignupRequest>,
) -> Result<(StatusCode, Json<SignupCreatedView>), ApiError> {
    let signup = NewSignup::new(req.camper_id, req.activity_id, req.time)?;

    let mut tx = state.pool.begin().await?;
    let created = SignupRepo::new(&mut *tx).create(signup).await?;
    let with_activity = SignupRepo::new(&mut *tx).get_with_activity(created.id).await?;
    let camper = CamperRepo::new(&mut *tx).get(created.camper_id).await?;
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupCreatedView::new(with_activity, camper)),
    ))
}

/// Signup routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/signups", post(create_signup))
}
