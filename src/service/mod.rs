//! Repository functions over plain row structs. Each takes the pool (or a connection
//! inside a caller's transaction) explicitly.

mod pizzas;
mod restaurant_pizzas;
mod restaurants;
mod validation;
pub use pizzas::PizzaService;
pub use restaurant_pizzas::RestaurantPizzaService;
pub use restaurants::RestaurantService;
pub use validation::RequestValidator;
