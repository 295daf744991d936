//! Demo data for a fresh database.

use pizzeria_adapter_http_axum::state::AppState;
use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_app::services::restaurant_pizza_service::CreateRestaurantPizza;
use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::pizza::Pizza;
use pizzeria_domain::restaurant::Restaurant;

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// `(restaurant index, pizza index, price)`
const MENU: [(usize, usize, i64); 5] = [(0, 0, 10), (0, 1, 12), (1, 1, 9), (1, 2, 15), (2, 0, 8)];

/// Fill the store with demo restaurants, pizzas and prices.
///
/// Does nothing when at least one restaurant already exists. Returns whether
/// anything was written.
///
/// # Errors
///
/// Returns the first error reported by a service.
pub async fn seed<R, P, L>(state: &AppState<R, P, L>) -> Result<bool, PizzeriaError>
where
    R: RestaurantRepository + Send + Sync + 'static,
    P: PizzaRepository + Send + Sync + 'static,
    L: RestaurantPizzaRepository + Send + Sync + 'static,
{
    if !state.restaurant_service.list_restaurants().await?.is_empty() {
        tracing::debug!("store already populated, skipping seed");
        return Ok(false);
    }

    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let restaurant = Restaurant::builder().name(name).address(address).build();
        restaurants.push(state.restaurant_service.create_restaurant(restaurant).await?);
    }

    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let pizza = Pizza::builder().name(name).ingredients(ingredients).build();
        pizzas.push(state.pizza_service.create_pizza(pizza).await?);
    }

    for (restaurant, pizza, price) in MENU {
        state
            .restaurant_pizza_service
            .create_restaurant_pizza(CreateRestaurantPizza {
                price,
                pizza_id: pizzas[pizza].id,
                restaurant_id: restaurants[restaurant].id,
            })
            .await?;
    }

    tracing::info!(
        restaurants = restaurants.len(),
        pizzas = pizzas.len(),
        links = MENU.len(),
        "seeded demo data"
    );
    Ok(true)
}
