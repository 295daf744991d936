//! `SQLite` implementation of [`RestaurantPizzaRepository`].
//!
//! The relation views are plain joins computed on every call; nothing is
//! cached or loaded lazily.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use pizzeria_app::ports::RestaurantPizzaRepository;
use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use pizzeria_domain::pizza::Pizza;
use pizzeria_domain::restaurant::Restaurant;
use pizzeria_domain::restaurant_pizza::{
    MenuItem, NewRestaurantPizza, Offer, Price, RestaurantPizza,
};

use crate::error::StorageError;

fn link_from_row(row: &SqliteRow) -> Result<RestaurantPizza, sqlx::Error> {
    let price: i64 = row.try_get("price")?;
    let price = Price::new(price).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

    Ok(RestaurantPizza {
        id: RestaurantPizzaId::new(row.try_get("id")?),
        price,
        pizza_id: PizzaId::new(row.try_get("pizza_id")?),
        restaurant_id: RestaurantId::new(row.try_get("restaurant_id")?),
    })
}

/// Wrapper for converting database rows into domain [`RestaurantPizza`].
struct Wrapper(RestaurantPizza);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        link_from_row(row).map(Self)
    }
}

/// A link row joined with its pizza.
struct MenuItemWrapper(MenuItem);

impl<'r> FromRow<'r, SqliteRow> for MenuItemWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let link = link_from_row(row)?;
        let pizza = Pizza {
            id: link.pizza_id,
            name: row.try_get("pizza_name")?,
            ingredients: row.try_get("pizza_ingredients")?,
        };
        Ok(Self(MenuItem { link, pizza }))
    }
}

/// A link row joined with its restaurant.
struct OfferWrapper(Offer);

impl<'r> FromRow<'r, SqliteRow> for OfferWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let link = link_from_row(row)?;
        let restaurant = Restaurant {
            id: link.restaurant_id,
            name: row.try_get("restaurant_name")?,
            address: row.try_get("restaurant_address")?,
        };
        Ok(Self(Offer { link, restaurant }))
    }
}

const INSERT: &str =
    "INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM restaurant_pizzas WHERE id = ?";

const SELECT_BY_RESTAURANT: &str = r"
    SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
           p.name AS pizza_name, p.ingredients AS pizza_ingredients
    FROM restaurant_pizzas rp
    JOIN pizzas p ON p.id = rp.pizza_id
    WHERE rp.restaurant_id = ?
    ORDER BY rp.id
";

const SELECT_BY_PIZZA: &str = r"
    SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
           r.name AS restaurant_name, r.address AS restaurant_address
    FROM restaurant_pizzas rp
    JOIN restaurants r ON r.id = rp.restaurant_id
    WHERE rp.pizza_id = ?
    ORDER BY rp.id
";

/// `SQLite`-backed repository for priced restaurant/pizza links.
#[derive(Clone)]
pub struct SqliteRestaurantPizzaRepository {
    pool: SqlitePool,
}

impl SqliteRestaurantPizzaRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RestaurantPizzaRepository for SqliteRestaurantPizzaRepository {
    fn create(
        &self,
        link: NewRestaurantPizza,
    ) -> impl Future<Output = Result<RestaurantPizza, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(link.price.as_i64())
                .bind(link.pizza_id.as_i64())
                .bind(link.restaurant_id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(link.with_id(RestaurantPizzaId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: RestaurantPizzaId,
    ) -> impl Future<Output = Result<Option<RestaurantPizza>, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn find_by_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> impl Future<Output = Result<Vec<MenuItem>, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<MenuItemWrapper> = sqlx::query_as(SELECT_BY_RESTAURANT)
                .bind(restaurant_id.as_i64())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_pizza(
        &self,
        pizza_id: PizzaId,
    ) -> impl Future<Output = Result<Vec<Offer>, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<OfferWrapper> = sqlx::query_as(SELECT_BY_PIZZA)
                .bind(pizza_id.as_i64())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pizza_repo::SqlitePizzaRepository;
    use crate::pool::memory_pool;
    use crate::restaurant_repo::SqliteRestaurantRepository;
    use pizzeria_app::ports::{PizzaRepository, RestaurantRepository};

    struct Fixture {
        links: SqliteRestaurantPizzaRepository,
        restaurants: SqliteRestaurantRepository,
        shack: Restaurant,
        kiki: Restaurant,
        emma: Pizza,
        geri: Pizza,
    }

    async fn setup() -> Fixture {
        let pool = memory_pool().await;
        let restaurants = SqliteRestaurantRepository::new(pool.clone());
        let pizzas = SqlitePizzaRepository::new(pool.clone());
        let shack = restaurants
            .create(Restaurant::builder().name("Shack").address("address1").build())
            .await
            .unwrap();
        let kiki = restaurants
            .create(Restaurant::builder().name("Kiki's").address("address3").build())
            .await
            .unwrap();
        let emma = pizzas
            .create(Pizza::builder().name("Emma").ingredients("Dough").build())
            .await
            .unwrap();
        let geri = pizzas
            .create(Pizza::builder().name("Geri").ingredients("Pepperoni").build())
            .await
            .unwrap();
        Fixture {
            links: SqliteRestaurantPizzaRepository::new(pool),
            restaurants,
            shack,
            kiki,
            emma,
            geri,
        }
    }

    fn new_link(price: i64, pizza: &Pizza, restaurant: &Restaurant) -> NewRestaurantPizza {
        NewRestaurantPizza::new(Price::new(price).unwrap(), pizza.id, restaurant.id)
    }

    #[tokio::test]
    async fn should_create_and_retrieve_link() {
        let f = setup().await;

        let created = f.links.create(new_link(10, &f.emma, &f.shack)).await.unwrap();

        let fetched = f.links.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.price.as_i64(), 10);
        assert_eq!(fetched.pizza_id, f.emma.id);
        assert_eq!(fetched.restaurant_id, f.shack.id);
    }

    #[tokio::test]
    async fn should_fail_when_pizza_does_not_exist() {
        let f = setup().await;
        let dangling = NewRestaurantPizza::new(Price::new(10).unwrap(), PizzaId::new(999), f.shack.id);

        let result = f.links.create(dangling).await;
        assert!(matches!(result, Err(PizzeriaError::Storage(_))));
    }

    #[tokio::test]
    async fn should_join_menu_of_restaurant_with_pizzas() {
        let f = setup().await;
        f.links.create(new_link(10, &f.emma, &f.shack)).await.unwrap();
        f.links.create(new_link(12, &f.geri, &f.shack)).await.unwrap();
        f.links.create(new_link(8, &f.emma, &f.kiki)).await.unwrap();

        let menu = f.links.find_by_restaurant(f.shack.id).await.unwrap();
        let pizzas: Vec<&Pizza> = menu.iter().map(|item| &item.pizza).collect();
        assert_eq!(pizzas, vec![&f.emma, &f.geri]);
        assert!(menu.iter().all(|item| item.link.restaurant_id == f.shack.id));
    }

    #[tokio::test]
    async fn should_join_offers_of_pizza_with_restaurants() {
        let f = setup().await;
        f.links.create(new_link(10, &f.emma, &f.shack)).await.unwrap();
        f.links.create(new_link(8, &f.emma, &f.kiki)).await.unwrap();
        f.links.create(new_link(12, &f.geri, &f.shack)).await.unwrap();

        let offers = f.links.find_by_pizza(f.emma.id).await.unwrap();
        let restaurants: Vec<&Restaurant> = offers.iter().map(|offer| &offer.restaurant).collect();
        assert_eq!(restaurants, vec![&f.shack, &f.kiki]);
    }

    #[tokio::test]
    async fn should_drop_menu_when_restaurant_deleted() {
        let f = setup().await;
        f.links.create(new_link(10, &f.emma, &f.shack)).await.unwrap();
        f.links.create(new_link(8, &f.emma, &f.kiki)).await.unwrap();

        f.restaurants.delete(f.shack.id).await.unwrap();

        assert!(f.links.find_by_restaurant(f.shack.id).await.unwrap().is_empty());
        assert_eq!(f.links.find_by_pizza(f.emma.id).await.unwrap().len(), 1);
    }
}
