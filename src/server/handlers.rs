use super::types::{ErrorResponse, HealthResponse};
use crate::{
    Error,
    chef::{Chef, DishRequest, IngredientRequest, MenuResponse, Recipe},
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct AppState {
    pub chef: Arc<Chef>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

pub async fn chef_recommendation(
    State(state): State<AppState>,
) -> Result<Json<MenuResponse>, HandlerError> {
    let span = info_span!("chef_recommendation", request_id = %Uuid::new_v4());

    async move {
        info!("Received menu recommendation request");

        match state.chef.recommend_menu().await {
            Ok(menu) => {
                info!("Returning menu with {} courses", menu.menu.len());
                Ok(Json(menu))
            }
            Err(e) => Err(failure("Menü oluşturulamadı", e)),
        }
    }
    .instrument(span)
    .await
}

pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(request): Json<IngredientRequest>,
) -> Result<Json<Recipe>, HandlerError> {
    let span = info_span!("generate_recipe", request_id = %Uuid::new_v4());

    async move {
        info!("Received recipe request for ingredients: {:?}", request.ingredients);
        if let Err(e) = request.validate() {
            return Err(rejected(e.into()));
        }

        match state.chef.generate_recipe(&request).await {
            Ok(recipe) => {
                info!("Generated recipe: {}", recipe.name);
                Ok(Json(recipe))
            }
            Err(e) => Err(failure("Tarif oluşturulamadı", e)),
        }
    }
    .instrument(span)
    .await
}

pub async fn generate_recipe_by_name(
    State(state): State<AppState>,
    Json(request): Json<DishRequest>,
) -> Result<Json<Recipe>, HandlerError> {
    let span = info_span!("generate_recipe_by_name", request_id = %Uuid::new_v4());

    async move {
        info!("Received recipe request for dish: {}", request.dish_name);
        if let Err(e) = request.validate() {
            return Err(rejected(e.into()));
        }

        match state.chef.generate_recipe_by_name(&request).await {
            Ok(recipe) => {
                info!("Generated recipe: {}", recipe.name);
                Ok(Json(recipe))
            }
            Err(e) => Err(failure("Tarif oluşturulamadı", e)),
        }
    }
    .instrument(span)
    .await
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

fn failure(context: &str, e: Error) -> HandlerError {
    error!(kind = e.kind(), "{}: {}", context, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: format!("{}: {}", context, e),
            kind: e.kind().to_string(),
        }),
    )
}

fn rejected(e: Error) -> HandlerError {
    info!("Rejected invalid request: {}", e);
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            detail: e.to_string(),
            kind: e.kind().to_string(),
        }),
    )
}
