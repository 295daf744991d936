//! `RestaurantPizza` service: putting a pizza on a restaurant's menu at a price.

use pizzeria_domain::error::{NotFoundError, PizzeriaError, ValidationError};
use pizzeria_domain::id::{PizzaId, RestaurantId};
use pizzeria_domain::restaurant_pizza::{NewRestaurantPizza, Price};
use pizzeria_domain::view::RestaurantPizzaDetail;

use crate::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

/// Already-parsed input for [`RestaurantPizzaService::create_restaurant_pizza`].
///
/// The price is still raw: range checking is part of the use-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateRestaurantPizza {
    pub price: i64,
    pub pizza_id: PizzaId,
    pub restaurant_id: RestaurantId,
}

/// Application service for priced links.
pub struct RestaurantPizzaService<L, R, P> {
    links: L,
    restaurants: R,
    pizzas: P,
}

impl<L, R, P> RestaurantPizzaService<L, R, P>
where
    L: RestaurantPizzaRepository,
    R: RestaurantRepository,
    P: PizzaRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(links: L, restaurants: R, pizzas: P) -> Self {
        Self {
            links,
            restaurants,
            pizzas,
        }
    }

    /// Validate the price, resolve both ends, then store the link.
    ///
    /// Checks run in that order and each one short-circuits before anything
    /// is written.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::PriceOutOfRange`] when the price is outside `1..=30`.
    /// - [`PizzeriaError::NotFound`] when the pizza or the restaurant is unknown.
    /// - [`ValidationError::Rejected`] when the store refuses the insert.
    #[tracing::instrument(skip(self))]
    pub async fn create_restaurant_pizza(
        &self,
        input: CreateRestaurantPizza,
    ) -> Result<RestaurantPizzaDetail, PizzeriaError> {
        let price = Price::new(input.price)?;

        let pizza = self
            .pizzas
            .get_by_id(input.pizza_id)
            .await?
            .ok_or_else(|| NotFoundError {
                entity: "Pizza",
                id: input.pizza_id.to_string(),
            })?;
        let restaurant = self
            .restaurants
            .get_by_id(input.restaurant_id)
            .await?
            .ok_or_else(|| NotFoundError {
                entity: "Restaurant",
                id: input.restaurant_id.to_string(),
            })?;

        let link = self
            .links
            .create(NewRestaurantPizza::new(price, pizza.id, restaurant.id))
            .await
            .map_err(|err| match err {
                PizzeriaError::Storage(source) => {
                    tracing::warn!(error = %source, "restaurant pizza rejected by store");
                    ValidationError::Rejected.into()
                }
                other => other,
            })?;

        Ok(RestaurantPizzaDetail::new(link, pizza, restaurant))
    }
}
