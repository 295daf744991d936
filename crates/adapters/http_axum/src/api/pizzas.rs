//! JSON REST handlers for pizzas.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_domain::view::PizzaDetail;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<PizzaDetail>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /pizzas`
pub async fn list<R, P, L>(
    State(state): State<AppState<R, P, L>>,
) -> Result<ListResponse, ApiError>
where
    R: RestaurantRepository + Send + Sync + 'static,
    P: PizzaRepository + Send + Sync + 'static,
    L: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let pizzas = state.pizza_service.list_pizzas().await?;
    Ok(ListResponse::Ok(Json(pizzas)))
}
