//! Storage port: repository traits for persistence.
//!
//! Lookups by id return `Ok(None)` when nothing matches; only services turn
//! absence into [`NotFoundError`](pizzeria_domain::error::NotFoundError).

use std::future::Future;

use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use pizzeria_domain::pizza::{NewPizza, Pizza};
use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};
use pizzeria_domain::restaurant_pizza::{MenuItem, NewRestaurantPizza, Offer, RestaurantPizza};

/// Repository for persisting and querying [`Restaurant`]s.
pub trait RestaurantRepository {
    /// Insert a restaurant and return it with its generated id.
    fn create(
        &self,
        restaurant: NewRestaurant,
    ) -> impl Future<Output = Result<Restaurant, PizzeriaError>> + Send;

    /// Get a restaurant by its unique identifier.
    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, PizzeriaError>> + Send;

    /// Get all restaurants, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, PizzeriaError>> + Send;

    /// Delete a restaurant together with all of its `RestaurantPizza` links,
    /// atomically.
    ///
    /// Resolves to `false` when no restaurant with `id` existed, in which case
    /// nothing was changed.
    fn delete(&self, id: RestaurantId) -> impl Future<Output = Result<bool, PizzeriaError>> + Send;
}

/// Repository for persisting and querying [`Pizza`]s.
pub trait PizzaRepository {
    /// Insert a pizza and return it with its generated id.
    fn create(&self, pizza: NewPizza) -> impl Future<Output = Result<Pizza, PizzeriaError>> + Send;

    /// Get a pizza by its unique identifier.
    fn get_by_id(
        &self,
        id: PizzaId,
    ) -> impl Future<Output = Result<Option<Pizza>, PizzeriaError>> + Send;

    /// Get all pizzas, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Pizza>, PizzeriaError>> + Send;
}

/// Repository for the priced links between restaurants and pizzas.
pub trait RestaurantPizzaRepository {
    /// Insert a link and return it with its generated id.
    ///
    /// Fails if either foreign key does not resolve.
    fn create(
        &self,
        link: NewRestaurantPizza,
    ) -> impl Future<Output = Result<RestaurantPizza, PizzeriaError>> + Send;

    /// Get a link by its unique identifier.
    fn get_by_id(
        &self,
        id: RestaurantPizzaId,
    ) -> impl Future<Output = Result<Option<RestaurantPizza>, PizzeriaError>> + Send;

    /// Links of one restaurant joined with their pizzas, ordered by link id.
    fn find_by_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> impl Future<Output = Result<Vec<MenuItem>, PizzeriaError>> + Send;

    /// Links of one pizza joined with their restaurants, ordered by link id.
    fn find_by_pizza(
        &self,
        pizza_id: PizzaId,
    ) -> impl Future<Output = Result<Vec<Offer>, PizzeriaError>> + Send;
}
