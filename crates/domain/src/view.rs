//! Serialized views: the **detailed** shapes returned to clients.
//!
//! Every entity serializes on its own to its **basic** form (scalar fields
//! only). The views below add exactly one level of relations, always rendered
//! in basic form, so a nested entity never drags its own relations along.
//!
//! Derived collections (`pizzas` of a restaurant, `restaurants` of a pizza)
//! are distinct by id and keep the order of the underlying links.

use std::collections::HashSet;

use serde::Serialize;

use crate::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use crate::pizza::Pizza;
use crate::restaurant::Restaurant;
use crate::restaurant_pizza::{MenuItem, Offer, Price, RestaurantPizza};

/// Restaurant as it appears in the restaurant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantListing {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub pizzas: Vec<Pizza>,
}

impl RestaurantListing {
    #[must_use]
    pub fn new(restaurant: Restaurant, menu: Vec<MenuItem>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            pizzas: distinct_pizzas(menu.into_iter().map(|item| item.pizza)),
        }
    }
}

/// A link rendered inside its restaurant, with the pizza it points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItemView {
    pub id: RestaurantPizzaId,
    pub pizza_id: PizzaId,
    pub restaurant_id: RestaurantId,
    pub price: Price,
    pub pizza: Pizza,
}

impl From<MenuItem> for MenuItemView {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.link.id,
            pizza_id: item.link.pizza_id,
            restaurant_id: item.link.restaurant_id,
            price: item.link.price,
            pizza: item.pizza,
        }
    }
}

/// Restaurant returned by the by-id lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantDetail {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<MenuItemView>,
    pub pizzas: Vec<Pizza>,
}

impl RestaurantDetail {
    #[must_use]
    pub fn new(restaurant: Restaurant, menu: Vec<MenuItem>) -> Self {
        let pizzas = distinct_pizzas(menu.iter().map(|item| item.pizza.clone()));
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas: menu.into_iter().map(MenuItemView::from).collect(),
            pizzas,
        }
    }
}

/// Pizza with the restaurants selling it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PizzaDetail {
    pub id: PizzaId,
    pub name: String,
    pub ingredients: String,
    pub restaurants: Vec<Restaurant>,
}

impl PizzaDetail {
    #[must_use]
    pub fn new(pizza: Pizza, offers: Vec<Offer>) -> Self {
        let mut seen = HashSet::new();
        let restaurants = offers
            .into_iter()
            .map(|offer| offer.restaurant)
            .filter(|restaurant| seen.insert(restaurant.id))
            .collect();
        Self {
            id: pizza.id,
            name: pizza.name,
            ingredients: pizza.ingredients,
            restaurants,
        }
    }
}

/// A freshly created link with both ends expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantPizzaDetail {
    pub id: RestaurantPizzaId,
    pub price: Price,
    pub pizza_id: PizzaId,
    pub restaurant_id: RestaurantId,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}

impl RestaurantPizzaDetail {
    #[must_use]
    pub fn new(link: RestaurantPizza, pizza: Pizza, restaurant: Restaurant) -> Self {
        Self {
            id: link.id,
            price: link.price,
            pizza_id: link.pizza_id,
            restaurant_id: link.restaurant_id,
            pizza,
            restaurant,
        }
    }
}

fn distinct_pizzas(pizzas: impl Iterator<Item = Pizza>) -> Vec<Pizza> {
    let mut seen = HashSet::new();
    pizzas.filter(|pizza| seen.insert(pizza.id)).collect()
}
