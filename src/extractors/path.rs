//! Restaurant id from the request path.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Integer id from `/restaurants/:id`. An id that does not parse names no restaurant,
/// so it is rejected as not found rather than as a bad request.
#[derive(Clone, Copy, Debug)]
pub struct RestaurantIdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for RestaurantIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("Restaurant"))?;
        Ok(RestaurantIdPath(id))
    }
}
