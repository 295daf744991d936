//! # pizzeria-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RestaurantRepository`: create, get, list, cascading delete
//!   - `PizzaRepository`: create, get, list
//!   - `RestaurantPizzaRepository`: create links and join them with either end
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RestaurantService`: list, get detail, delete
//!   - `PizzaService`: list with the restaurants selling each pizza
//!   - `RestaurantPizzaService`: validate and create priced links
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `pizzeria-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
