//! # pizzeria-domain
//!
//! Pure domain model for the pizzeria backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Restaurants** and **Pizzas**
//! - Define **`RestaurantPizza`** links and the [`Price`](restaurant_pizza::Price)
//!   rule they carry
//! - Define the serialized **views** that flatten the many-to-many relation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
pub mod view;
