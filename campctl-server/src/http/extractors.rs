//! Custom Axum extractors

use std::marker::PhantomData;

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON body whose rejections become validation errors.
///
/// Unreadable JSON and fields of the wrong type are reported exactly like
/// a failed domain rule.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::MalformedBody {
                reason: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}

/// A resource addressable by integer id in the path
pub trait PathResource {
    /// Name used in the not-found message
    const NAME: &'static str;
}

pub enum CamperResource {}

impl PathResource for CamperResource {
    const NAME: &'static str = "Camper";
}

pub enum ActivityResource {}

impl PathResource for ActivityResource {
    const NAME: &'static str = "Activity";
}

/// Extract an integer id from path.
///
/// A segment that is not an integer cannot name an entity, so it is
/// rejected as not found for the resource `R`.
pub struct ValidId<R>(pub i64, PhantomData<R>);

impl<R> ValidId<R> {
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl<S, R> FromRequestParts<S> for ValidId<R>
where
    S: Send + Sync,
    R: PathResource + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let not_found = || ApiError::NotFound { resource: R::NAME };

        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found())?;

        let id = raw.parse::<i64>().map_err(|_| not_found())?;
        Ok(Self(id, PhantomData))
    }
}
