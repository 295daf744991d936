//! Shared application state for axum handlers.

use std::sync::Arc;

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_app::services::pizza_service::PizzaService;
use pizzeria_app::services::restaurant_pizza_service::RestaurantPizzaService;
use pizzeria_app::services::restaurant_service::RestaurantService;

/// Application state shared across all axum handlers.
///
/// Generic over the restaurant (`R`), pizza (`P`) and link (`L`) repositories
/// to avoid dynamic dispatch. `Clone` is implemented manually so the
/// repositories themselves do not need to be `Clone`; only the `Arc`
/// wrappers are cloned.
pub struct AppState<R, P, L> {
    /// Restaurant listing, detail and deletion.
    pub restaurant_service: Arc<RestaurantService<R, L>>,
    /// Pizza listing.
    pub pizza_service: Arc<PizzaService<P, L>>,
    /// Creation of priced links.
    pub restaurant_pizza_service: Arc<RestaurantPizzaService<L, R, P>>,
}

impl<R, P, L> Clone for AppState<R, P, L> {
    fn clone(&self) -> Self {
        Self {
            restaurant_service: Arc::clone(&self.restaurant_service),
            pizza_service: Arc::clone(&self.pizza_service),
            restaurant_pizza_service: Arc::clone(&self.restaurant_pizza_service),
        }
    }
}

impl<R, P, L> AppState<R, P, L>
where
    R: RestaurantRepository + Send + Sync + 'static,
    P: PizzaRepository + Send + Sync + 'static,
    L: RestaurantPizzaRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        restaurant_service: RestaurantService<R, L>,
        pizza_service: PizzaService<P, L>,
        restaurant_pizza_service: RestaurantPizzaService<L, R, P>,
    ) -> Self {
        Self {
            restaurant_service: Arc::new(restaurant_service),
            pizza_service: Arc::new(pizza_service),
            restaurant_pizza_service: Arc::new(restaurant_pizza_service),
        }
    }
}

impl<R, P, L> AppState<R, P, L>
where
    R: RestaurantRepository + Clone + Send + Sync + 'static,
    P: PizzaRepository + Clone + Send + Sync + 'static,
    L: RestaurantPizzaRepository + Clone + Send + Sync + 'static,
{
    /// Build every service from one handle per repository.
    ///
    /// Repositories are cloned into each service that needs them, so they
    /// should be cheap handles (e.g. wrapping a connection pool).
    pub fn from_repositories(restaurants: R, pizzas: P, links: L) -> Self {
        Self::new(
            RestaurantService::new(restaurants.clone(), links.clone()),
            PizzaService::new(pizzas.clone(), links.clone()),
            RestaurantPizzaService::new(links, restaurants, pizzas),
        )
    }
}
