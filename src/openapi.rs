use crate::error::{ErrorBody, ErrorsBody};
use crate::handlers::{pizzas, restaurant_pizzas, restaurants};
use crate::response::{MenuEntryView, PizzaSummary, RestaurantDetail, RestaurantPizzaView, RestaurantSummary};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurants::list,
        restaurants::read,
        restaurants::delete,
        pizzas::list,
        restaurant_pizzas::create,
    ),
    components(
        schemas(
            RestaurantSummary,
            RestaurantDetail,
            MenuEntryView,
            PizzaSummary,
            RestaurantPizzaView,
            restaurant_pizzas::CreateRestaurantPizzaRequest,
            ErrorBody,
            ErrorsBody
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant listing, detail and removal"),
        (name = "pizzas", description = "Pizza catalogue"),
        (name = "restaurant_pizzas", description = "Priced menu entries")
    ),
    info(
        title = "Pizza API",
        description = "Restaurants, pizzas and the prices restaurants charge for them",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
