use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Body of `POST /generate-recipe/`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IngredientRequest {
    #[serde(deserialize_with = "non_blank_items")]
    #[validate(length(min = 1, message = "At least one ingredient is required"))]
    pub ingredients: Vec<String>,
    #[serde(rename = "kategori", alias = "category")]
    pub category: String,
    #[serde(default)]
    pub diet_info: String,
}

/// Body of `POST /generate-recipe-by-name/`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DishRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Dish name cannot be empty"))]
    pub dish_name: String,
    #[serde(default)]
    pub diet_info: String,
}

/// A single recipe as produced by the model and returned to the client.
///
/// The wire keys are the ones the mobile client reads; English names are
/// accepted as aliases when the model drifts from the requested schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Recipe {
    #[serde(rename = "yemekAdi", alias = "name")]
    #[validate(length(min = 1, message = "Recipe name cannot be empty"))]
    pub name: String,

    #[serde(rename = "aciklama", alias = "description")]
    pub description: String,

    #[serde(rename = "sure", alias = "duration", deserialize_with = "string_or_number")]
    pub duration: String,

    #[serde(rename = "kalori", alias = "calories", deserialize_with = "string_or_number")]
    pub calories: String,

    #[serde(rename = "malzemeler", alias = "ingredients")]
    #[validate(length(min = 1, message = "Recipe must list its ingredients"))]
    pub ingredients: Vec<String>,

    #[serde(rename = "tarif", alias = "steps")]
    #[validate(length(min = 1, message = "Recipe must have at least one step"))]
    pub steps: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
}

/// Three-course menu: soup, main course, dessert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuResponse {
    #[validate(length(equal = 3, message = "Menu must contain exactly three courses"), nested)]
    pub menu: Vec<Recipe>,
}

impl IngredientRequest {
    /// Ingredients joined for display inside a prompt.
    pub fn ingredient_list(&self) -> String {
        self.ingredients.join(", ")
    }
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

// Blank entries are dropped so `["", " "]` fails the length check.
fn non_blank_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<String>::deserialize(deserializer)?;
    Ok(items
        .into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect())
}

// Models occasionally emit `"kalori": 350` instead of `"350 kcal"`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}
