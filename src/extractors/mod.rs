//! Extractors whose rejections are reported in the API's own error format.

mod json;
mod path;
pub use json::ApiJson;
pub use path::RestaurantIdPath;
