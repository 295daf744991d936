//! Axum router assembly.

use axum::Router;
use axum::response::Html;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

use crate::state::AppState;

const WELCOME: &str = "<h1>Pizza Restaurants</h1>\
<p>Browse <a href=\"/restaurants\">restaurants</a> and <a href=\"/pizzas\">pizzas</a>.</p>";

/// Build the top-level axum [`Router`].
///
/// Serves the welcome page and health probe next to the JSON routes.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R, P, L>(state: AppState<R, P, L>) -> Router
where
    R: RestaurantRepository + Send + Sync + 'static,
    P: PizzaRepository + Send + Sync + 'static,
    L: RestaurantPizzaRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn welcome() -> Html<&'static str> {
    Html(WELCOME)
}

async fn health_check() -> &'static str {
    "OK"
}
