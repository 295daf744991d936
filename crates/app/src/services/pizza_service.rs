//! Pizza service: use-cases for managing pizzas.

use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::pizza::{NewPizza, Pizza};
use pizzeria_domain::view::PizzaDetail;

use crate::ports::{PizzaRepository, RestaurantPizzaRepository};

/// Application service for pizzas.
pub struct PizzaService<P, L> {
    repo: P,
    links: L,
}

impl<P: PizzaRepository, L: RestaurantPizzaRepository> PizzaService<P, L> {
    /// Create a new service backed by the given repositories.
    pub fn new(repo: P, links: L) -> Self {
        Self { repo, links }
    }

    /// Store a new pizza.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, pizza), fields(pizza_name = %pizza.name))]
    pub async fn create_pizza(&self, pizza: NewPizza) -> Result<Pizza, PizzeriaError> {
        self.repo.create(pizza).await
    }

    /// List every pizza with the distinct restaurants selling it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn list_pizzas(&self) -> Result<Vec<PizzaDetail>, PizzeriaError> {
        let pizzas = self.repo.get_all().await?;
        let mut details = Vec::with_capacity(pizzas.len());
        for pizza in pizzas {
            let offers = self.links.find_by_pizza(pizza.id).await?;
            details.push(PizzaDetail::new(pizza, offers));
        }
        Ok(details)
    }
}
