//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod pizzas;
#[allow(clippy::missing_errors_doc)]
pub mod restaurant_pizzas;
#[allow(clippy::missing_errors_doc)]
pub mod restaurants;

use axum::Router;
use axum::routing::{get, post};

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

use crate::state::AppState;

/// Build the API routes.
pub fn routes<R, P, L>() -> Router<AppState<R, P, L>>
where
    R: RestaurantRepository + Send + Sync + 'static,
    P: PizzaRepository + Send + Sync + 'static,
    L: RestaurantPizzaRepository + Send + Sync + 'static,
{
    Router::new()
        // Restaurants
        .route("/restaurants", get(restaurants::list::<R, P, L>))
        .route(
            "/restaurants/{id}",
            get(restaurants::get::<R, P, L>).delete(restaurants::delete::<R, P, L>),
        )
        // Pizzas
        .route("/pizzas", get(pizzas::list::<R, P, L>))
        // Restaurant pizzas
        .route(
            "/restaurant_pizzas",
            post(restaurant_pizzas::create::<R, P, L>),
        )
}
