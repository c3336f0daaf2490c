use crate::error::AppError;
use crate::response::PizzaSummary;
use crate::service::PizzaService;
use crate::state::AppState;
use axum::{extract::State, Json};
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "All pizzas, without the restaurants serving them", body = Vec<PizzaSummary>),
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PizzaSummary>>, AppError> {
    let pizzas = PizzaService::list(&state.pool).await?;
    Ok(Json(pizzas.into_iter().map(PizzaSummary::from).collect()))
}
