//! Pizza: a recipe that any number of restaurants may sell.

use serde::{Deserialize, Serialize};

use crate::id::PizzaId;

/// A persisted pizza. Serializes to its basic form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: PizzaId,
    pub name: String,
    pub ingredients: String,
}

impl Pizza {
    /// Create a builder for a pizza that is not stored yet.
    #[must_use]
    pub fn builder() -> PizzaBuilder {
        PizzaBuilder::default()
    }
}

/// A pizza waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

impl NewPizza {
    /// Attach the id generated by the store.
    #[must_use]
    pub fn with_id(self, id: PizzaId) -> Pizza {
        Pizza {
            id,
            name: self.name,
            ingredients: self.ingredients,
        }
    }
}

/// Step-by-step builder for [`NewPizza`].
#[derive(Debug, Default)]
pub struct PizzaBuilder {
    name: Option<String>,
    ingredients: Option<String>,
}

impl PizzaBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    #[must_use]
    pub fn build(self) -> NewPizza {
        NewPizza {
            name: self.name.unwrap_or_default(),
            ingredients: self.ingredients.unwrap_or_default(),
        }
    }
}
