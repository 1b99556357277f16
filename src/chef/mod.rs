mod fence;
pub mod prompts;
mod service;
mod types;

pub use fence::strip_code_fence;
pub use service::{Chef, parse_model_output};
pub use types::{DishRequest, IngredientRequest, MenuResponse, Recipe};
