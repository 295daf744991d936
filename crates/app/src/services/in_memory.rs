//! In-memory implementation of every storage port, shared by service tests.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use pizzeria_domain::pizza::{NewPizza, Pizza};
use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};
use pizzeria_domain::restaurant_pizza::{MenuItem, NewRestaurantPizza, Offer, RestaurantPizza};

use crate::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

#[derive(Default)]
struct Tables {
    next_id: i64,
    restaurants: BTreeMap<RestaurantId, Restaurant>,
    pizzas: BTreeMap<PizzaId, Pizza>,
    links: BTreeMap<RestaurantPizzaId, RestaurantPizza>,
    /// When set, link inserts fail like a refused commit.
    refuse_links: bool,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Cloneable handle; clones share the same tables.
#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

#[derive(Debug)]
struct Refused;

impl std::fmt::Display for Refused {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("write refused")
    }
}

impl std::error::Error for Refused {}

impl InMemoryStore {
    pub(crate) fn refuse_links(&self) {
        self.tables.lock().unwrap().refuse_links = true;
    }

    pub(crate) fn link_count(&self) -> usize {
        self.tables.lock().unwrap().links.len()
    }
}

impl RestaurantRepository for InMemoryStore {
    fn create(
        &self,
        restaurant: NewRestaurant,
    ) -> impl Future<Output = Result<Restaurant, PizzeriaError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let restaurant = restaurant.with_id(RestaurantId::new(tables.next_id()));
        tables.restaurants.insert(restaurant.id, restaurant.clone());
        async { Ok(restaurant) }
    }

    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, PizzeriaError>> + Send {
        let result = self.tables.lock().unwrap().restaurants.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, PizzeriaError>> + Send {
        let result: Vec<Restaurant> = self
            .tables
            .lock()
            .unwrap()
            .restaurants
            .values()
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn delete(&self, id: RestaurantId) -> impl Future<Output = Result<bool, PizzeriaError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let existed = tables.restaurants.remove(&id).is_some();
        if existed {
            tables.links.retain(|_, link| link.restaurant_id != id);
        }
        async move { Ok(existed) }
    }
}

impl PizzaRepository for InMemoryStore {
    fn create(&self, pizza: NewPizza) -> impl Future<Output = Result<Pizza, PizzeriaError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let pizza = pizza.with_id(PizzaId::new(tables.next_id()));
        tables.pizzas.insert(pizza.id, pizza.clone());
        async { Ok(pizza) }
    }

    fn get_by_id(
        &self,
        id: PizzaId,
    ) -> impl Future<Output = Result<Option<Pizza>, PizzeriaError>> + Send {
        let result = self.tables.lock().unwrap().pizzas.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Pizza>, PizzeriaError>> + Send {
        let result: Vec<Pizza> = self
            .tables
            .lock()
            .unwrap()
            .pizzas
            .values()
            .cloned()
            .collect();
        async { Ok(result) }
    }
}

impl RestaurantPizzaRepository for InMemoryStore {
    fn create(
        &self,
        link: NewRestaurantPizza,
    ) -> impl Future<Output = Result<RestaurantPizza, PizzeriaError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let result = if tables.refuse_links {
            Err(PizzeriaError::Storage(Box::new(Refused)))
        } else {
            let link = link.with_id(RestaurantPizzaId::new(tables.next_id()));
            tables.links.insert(link.id, link.clone());
            Ok(link)
        };
        async { result }
    }

    fn get_by_id(
        &self,
        id: RestaurantPizzaId,
    ) -> impl Future<Output = Result<Option<RestaurantPizza>, PizzeriaError>> + Send {
        let result = self.tables.lock().unwrap().links.get(&id).cloned();
        async { Ok(result) }
    }

    fn find_by_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> impl Future<Output = Result<Vec<MenuItem>, PizzeriaError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result: Vec<MenuItem> = tables
            .links
            .values()
            .filter(|link| link.restaurant_id == restaurant_id)
            .filter_map(|link| {
                let pizza = tables.pizzas.get(&link.pizza_id)?.clone();
                Some(MenuItem {
                    link: link.clone(),
                    pizza,
                })
            })
            .collect();
        async { Ok(result) }
    }

    fn find_by_pizza(
        &self,
        pizza_id: PizzaId,
    ) -> impl Future<Output = Result<Vec<Offer>, PizzeriaError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result: Vec<Offer> = tables
            .links
            .values()
            .filter(|link| link.pizza_id == pizza_id)
            .filter_map(|link| {
                let restaurant = tables.restaurants.get(&link.restaurant_id)?.clone();
                Some(Offer {
                    link: link.clone(),
                    restaurant,
                })
            })
            .collect();
        async { Ok(result) }
    }
}
