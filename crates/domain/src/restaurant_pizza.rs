//! `RestaurantPizza`: the priced link saying a restaurant sells a pizza.
//!
//! The link carries the only validated field of the model: [`Price`], which
//! can only be constructed inside `Price::MIN..=Price::MAX`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use crate::pizza::Pizza;
use crate::restaurant::Restaurant;

/// Price of a pizza at a given restaurant, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Price(i64);

impl Price {
    /// Lowest accepted price.
    pub const MIN: i64 = 1;
    /// Highest accepted price.
    pub const MAX: i64 = 30;

    /// Validate a raw price.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PriceOutOfRange`] when `value` is outside
    /// `Price::MIN..=Price::MAX`.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::PriceOutOfRange(value))
        }
    }

    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Price {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A persisted priced link. Serializes to its basic form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPizza {
    pub id: RestaurantPizzaId,
    pub price: Price,
    pub pizza_id: PizzaId,
    pub restaurant_id: RestaurantId,
}

/// A link waiting for the store to assign its id.
///
/// Holding a [`Price`] means the range rule already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: Price,
    pub pizza_id: PizzaId,
    pub restaurant_id: RestaurantId,
}

impl NewRestaurantPizza {
    #[must_use]
    pub fn new(price: Price, pizza_id: PizzaId, restaurant_id: RestaurantId) -> Self {
        Self {
            price,
            pizza_id,
            restaurant_id,
        }
    }

    /// Attach the id generated by the store.
    #[must_use]
    pub fn with_id(self, id: RestaurantPizzaId) -> RestaurantPizza {
        RestaurantPizza {
            id,
            price: self.price,
            pizza_id: self.pizza_id,
            restaurant_id: self.restaurant_id,
        }
    }
}

/// A link seen from its restaurant: the link joined with its pizza.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub link: RestaurantPizza,
    pub pizza: Pizza,
}

/// A link seen from its pizza: the link joined with its restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub link: RestaurantPizza,
    pub restaurant: Restaurant,
}
