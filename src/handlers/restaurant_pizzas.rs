use crate::error::{AppError, ErrorsBody};
use crate::extractors::ApiJson;
use crate::response::RestaurantPizzaView;
use crate::service::{RequestValidator, RestaurantPizzaService};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;
use utoipa::ToSchema;

/// Fields are kept loose so that a wrong type is reported like any other invalid value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Price between 1 and 30 inclusive
    #[schema(value_type = i64, minimum = 1, maximum = 30)]
    pub price: Option<Value>,
    /// Id of an existing pizza
    #[schema(value_type = i64)]
    pub pizza_id: Option<Value>,
    /// Id of an existing restaurant
    #[schema(value_type = i64)]
    pub restaurant_id: Option<Value>,
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Pizza added to the restaurant's menu", body = RestaurantPizzaView),
        (status = 400, description = "Invalid price, body, or ids", body = ErrorsBody),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateRestaurantPizzaRequest>,
) -> Result<(StatusCode, Json<RestaurantPizzaView>), AppError> {
    let new = RequestValidator::restaurant_pizza(
        payload.price.as_ref(),
        payload.pizza_id.as_ref(),
        payload.restaurant_id.as_ref(),
    )?;
    let created = RestaurantPizzaService::create(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}
