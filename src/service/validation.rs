//! Request validation for association creation.

use crate::error::{AppError, GENERIC_VALIDATION_MESSAGE, INVALID_REFERENCE_MESSAGE};
use crate::models::{NewRestaurantPizza, Price};
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Check a raw create payload. The price is checked first, so an out-of-range price
    /// wins over unknown ids. Ids are only checked for shape here; existence is checked
    /// against the database by the caller.
    pub fn restaurant_pizza(
        price: Option<&Value>,
        pizza_id: Option<&Value>,
        restaurant_id: Option<&Value>,
    ) -> Result<NewRestaurantPizza, AppError> {
        let price = Self::price(price)?;
        match (Self::id(pizza_id), Self::id(restaurant_id)) {
            (Some(pizza_id), Some(restaurant_id)) => Ok(NewRestaurantPizza {
                price,
                restaurant_id,
                pizza_id,
            }),
            _ => Err(AppError::validation(INVALID_REFERENCE_MESSAGE)),
        }
    }

    /// Missing, non-integer and out-of-range prices all produce the same generic error.
    pub fn price(value: Option<&Value>) -> Result<Price, AppError> {
        value
            .and_then(Value::as_i64)
            .and_then(|p| Price::new(p).ok())
            .ok_or_else(|| AppError::validation(GENERIC_VALIDATION_MESSAGE))
    }

    fn id(value: Option<&Value>) -> Option<i64> {
        value.and_then(Value::as_i64)
    }
}
