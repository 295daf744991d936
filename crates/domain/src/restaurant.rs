//! Restaurant: a place that sells pizzas at its own prices.

use serde::{Deserialize, Serialize};

use crate::id::RestaurantId;

/// A persisted restaurant.
///
/// Serializes to its **basic** form: scalar fields only, no relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
}

impl Restaurant {
    /// Create a builder for a restaurant that is not stored yet.
    #[must_use]
    pub fn builder() -> RestaurantBuilder {
        RestaurantBuilder::default()
    }
}

/// A restaurant waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

impl NewRestaurant {
    /// Attach the id generated by the store.
    #[must_use]
    pub fn with_id(self, id: RestaurantId) -> Restaurant {
        Restaurant {
            id,
            name: self.name,
            address: self.address,
        }
    }
}

/// Step-by-step builder for [`NewRestaurant`].
#[derive(Debug, Default)]
pub struct RestaurantBuilder {
    name: Option<String>,
    address: Option<String>,
}

impl RestaurantBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Consume the builder. Missing fields default to empty text.
    #[must_use]
    pub fn build(self) -> NewRestaurant {
        NewRestaurant {
            name: self.name.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
        }
    }
}
