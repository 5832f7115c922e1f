//! Activity endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::db::repos::ActivityRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ActivityResource, ValidId};
use crate::http::server::AppState;
use crate::http::views::ActivityView;

/// GET /activities - list all activities
async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ActivityView>>, ApiError> {
    let mut tx = state.pool.begin().await?;
    let activities = ActivityRepo::new(&mut *tx).list().await?;
    tx.commit().await?;

    Ok(Json(activities.into_iter().map(ActivityView::from).collect()))
}

/// DELETE /activities/{id} - delete an activity and its signups
async fn delete_activity(
    State(state): State<Arc<AppState>>,
    id: ValidId<ActivityResource>,
) -> Result<StatusCode, ApiError> {
    let mut tx = state.pool.begin().await?;
    ActivityRepo::new(&mut *tx).delete(id.get()).await?;
    tx.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Activity routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{id}", delete(delete_activity))
}
