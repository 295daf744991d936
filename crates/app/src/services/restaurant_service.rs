//! Restaurant service: use-cases for listing, inspecting and removing restaurants.

use pizzeria_domain::error::{NotFoundError, PizzeriaError};
use pizzeria_domain::id::RestaurantId;
use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};
use pizzeria_domain::view::{RestaurantDetail, RestaurantListing};

use crate::ports::{RestaurantPizzaRepository, RestaurantRepository};

/// Application service for restaurants.
///
/// `R` stores the restaurants themselves, `L` the priced links used to
/// compute which pizzas a restaurant sells.
pub struct RestaurantService<R, L> {
    repo: R,
    links: L,
}

impl<R: RestaurantRepository, L: RestaurantPizzaRepository> RestaurantService<R, L> {
    /// Create a new service backed by the given repositories.
    pub fn new(repo: R, links: L) -> Self {
        Self { repo, links }
    }

    /// Store a new restaurant.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, restaurant), fields(restaurant_name = %restaurant.name))]
    pub async fn create_restaurant(
        &self,
        restaurant: NewRestaurant,
    ) -> Result<Restaurant, PizzeriaError> {
        self.repo.create(restaurant).await
    }

    /// List every restaurant with the distinct pizzas it sells.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn list_restaurants(&self) -> Result<Vec<RestaurantListing>, PizzeriaError> {
        let restaurants = self.repo.get_all().await?;
        let mut listings = Vec::with_capacity(restaurants.len());
        for restaurant in restaurants {
            let menu = self.links.find_by_restaurant(restaurant.id).await?;
            listings.push(RestaurantListing::new(restaurant, menu));
        }
        Ok(listings)
    }

    /// Look up a restaurant with its links and pizzas.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::NotFound`] when no restaurant with `id`
    /// exists, or a storage error from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn get_restaurant(&self, id: RestaurantId) -> Result<RestaurantDetail, PizzeriaError> {
        let restaurant = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let menu = self.links.find_by_restaurant(id).await?;
        Ok(RestaurantDetail::new(restaurant, menu))
    }

    /// Delete a restaurant and every `RestaurantPizza` pointing at it.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::NotFound`] when no restaurant with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<(), PizzeriaError> {
        if self.repo.delete(id).await? {
            tracing::info!(restaurant_id = %id, "restaurant deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: RestaurantId) -> PizzeriaError {
    NotFoundError {
        entity: "Restaurant",
        id: id.to_string(),
    }
    .into()
}
