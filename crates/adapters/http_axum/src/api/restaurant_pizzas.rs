//! JSON REST handler for putting a pizza on a restaurant's menu.
//!
//! The body is read as a loose JSON object. Absent fields and wrongly typed
//! fields are reported separately, both in the `{"errors": [...]}` shape.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_app::services::restaurant_pizza_service::CreateRestaurantPizza;
use pizzeria_domain::error::ValidationError;
use pizzeria_domain::id::{PizzaId, RestaurantId};
use pizzeria_domain::view::RestaurantPizzaDetail;

use crate::error::ApiErrors;
use crate::state::AppState;

const FIELDS: [&str; 3] = ["price", "pizza_id", "restaurant_id"];

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<RestaurantPizzaDetail>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Read an integer out of a loosely typed JSON value.
///
/// Accepts integers, floats without a fractional part, and strings that
/// hold an integer once trimmed.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| {
                    float.fract() == 0.0 && *float >= i64::MIN as f64 && *float < i64::MAX as f64
                })
                .map(|float| float as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn integer_field(body: &Map<String, Value>, field: &'static str) -> Result<i64, ValidationError> {
    let value = body.get(field).ok_or(ValidationError::MissingField(field))?;
    coerce_integer(value).ok_or(ValidationError::InvalidType(field))
}

fn parse_body(body: &Map<String, Value>) -> Result<CreateRestaurantPizza, ValidationError> {
    if let Some(missing) = FIELDS.into_iter().find(|field| !body.contains_key(*field)) {
        return Err(ValidationError::MissingField(missing));
    }

    Ok(CreateRestaurantPizza {
        price: integer_field(body, "price")?,
        pizza_id: PizzaId::new(integer_field(body, "pizza_id")?),
        restaurant_id: RestaurantId::new(integer_field(body, "restaurant_id")?),
    })
}

/// `POST /restaurant_pizzas`
pub async fn create<R, P, L>(
    State(state): State<AppState<R, P, L>>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<CreateResponse, ApiErrors>
where
    R: RestaurantRepository + Send + Sync + 'static,
    P: PizzaRepository + Send + Sync + 'static,
    L: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable restaurant pizza body");
        ApiErrors::malformed_body()
    })?;

    let input = parse_body(&body)?;
    let created = state
        .restaurant_pizza_service
        .create_restaurant_pizza(input)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}
