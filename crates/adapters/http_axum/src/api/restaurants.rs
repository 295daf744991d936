//! JSON REST handlers for restaurants.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_domain::error::NotFoundError;
use pizzeria_domain::id::RestaurantId;
use pizzeria_domain::view::{RestaurantDetail, RestaurantListing};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<RestaurantListing>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<RestaurantDetail>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// A path segment that is not an integer cannot name any restaurant.
fn parse_id(id: &str) -> Result<RestaurantId, ApiError> {
    RestaurantId::from_str(id).map_err(|_| {
        ApiError::from(NotFoundError {
            entity: "Restaurant",
            id: id.to_string(),
        })
    })
}

/// `GET /restaurants`
pub async fn list<R, P, L>(
    State(state): State<AppState<R, P, L>>,
) -> Result<ListResponse, ApiError>
where
    R: RestaurantRepository + Send + Sync + 'static,
    P: PizzaRepository + Send + Sync + 'static,
    L: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let restaurants = state.restaurant_service.list_restaurants().await?;
    Ok(ListResponse::Ok(Json(restaurants)))
}

/// `GET /restaurants/:id`
pub async fn get<R, P, L>(
    State(state): State<AppState<R, P, L>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: RestaurantRepository + Send + Sync + 'static,
    P: PizzaRepository + Send + Sync + 'static,
    L: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let restaurant_id = parse_id(&id)?;
    let restaurant = state.restaurant_service.get_restaurant(restaurant_id).await?;
    Ok(GetResponse::Ok(Json(restaurant)))
}

/// `DELETE /restaurants/:id`
pub async fn delete<R, P, L>(
    State(state): State<AppState<R, P, L>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: RestaurantRepository + Send + Sync + 'static,
    P: PizzaRepository + Send + Sync + 'static,
    L: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let restaurant_id = parse_id(&id)?;
    state
        .restaurant_service
        .delete_restaurant(restaurant_id)
        .await?;
    Ok(DeleteResponse::NoContent)
}
