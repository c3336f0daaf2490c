use crate::error::{AppError, ErrorBody};
use crate::extractors::RestaurantIdPath;
use crate::response::{RestaurantDetail, RestaurantSummary};
use crate::service::RestaurantService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "All restaurants, without their menus", body = Vec<RestaurantSummary>),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<RestaurantSummary>>, AppError> {
    let restaurants = RestaurantService::list(&state.pool).await?;
    Ok(Json(restaurants.into_iter().map(RestaurantSummary::from).collect()))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(
        ("id" = i64, Path, description = "Restaurant id")
    ),
    responses(
        (status = 200, description = "Restaurant with its menu", body = RestaurantDetail),
        (status = 404, description = "Restaurant not found", body = ErrorBody),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn read(
    State(state): State<AppState>,
    RestaurantIdPath(id): RestaurantIdPath,
) -> Result<Json<RestaurantDetail>, AppError> {
    let restaurant = RestaurantService::get_detail(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Restaurant"))?;
    Ok(Json(restaurant.into()))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(
        ("id" = i64, Path, description = "Restaurant id")
    ),
    responses(
        (status = 204, description = "Restaurant and its menu deleted"),
        (status = 404, description = "Restaurant not found", body = ErrorBody),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    RestaurantIdPath(id): RestaurantIdPath,
) -> Result<StatusCode, AppError> {
    RestaurantService::delete(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Restaurant"))?;
    Ok(StatusCode::NO_CONTENT)
}
