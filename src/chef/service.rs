use super::{
    fence::strip_code_fence,
    prompts::{self, Season},
    types::{DishRequest, IngredientRequest, MenuResponse, Recipe},
};
use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, LlmClient},
};
use serde::de::DeserializeOwned;
use std::{sync::Arc, time::Duration};
use tracing::{debug, info};
use validator::Validate;

/// Turns cooking requests into prompts and model output into validated
/// recipes. Holds no per-request state and is shared across handlers.
pub struct Chef {
    llm: Arc<dyn LlmClient>,
    timeout: Duration,
    temperature: Option<f32>,
    system_prompt: Option<String>,
}

impl Chef {
    pub fn new(llm: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        Self {
            llm,
            timeout: config.timeout(),
            temperature: config.temperature,
            system_prompt: config.system_prompt.clone(),
        }
    }

    pub async fn recommend_menu(&self) -> Result<MenuResponse> {
        let season = Season::current();
        info!("Generating {} menu recommendation", season);

        self.generate(prompts::menu_prompt(season)).await
    }

    pub async fn generate_recipe(&self, request: &IngredientRequest) -> Result<Recipe> {
        info!(
            "Generating {} recipe from {} ingredients",
            request.category,
            request.ingredients.len()
        );

        let prompt = prompts::ingredients_prompt(
            &request.ingredient_list(),
            &request.category,
            &request.diet_info,
        );
        self.generate(prompt).await
    }

    pub async fn generate_recipe_by_name(&self, request: &DishRequest) -> Result<Recipe> {
        info!(
            "Generating recipe for '{}' (diet: '{}')",
            request.dish_name, request.diet_info
        );

        let prompt = prompts::dish_prompt(&request.dish_name, &request.diet_info);
        self.generate(prompt).await
    }

    /// Sends one prompt in JSON mode and parses the answer into `T`.
    async fn generate<T>(&self, prompt: String) -> Result<T>
    where
        T: DeserializeOwned + Validate,
    {
        let request = ChatCompletionRequest::from_prompt(self.system_prompt.as_deref(), prompt)
            .with_json_mode()
            .with_temperature(self.temperature);

        let response = tokio::time::timeout(self.timeout, self.llm.create_chat_completion(request))
            .await
            .map_err(|_| Error::Timeout(self.timeout))??;

        if let Some(usage) = &response.usage {
            debug!(
                "Model {} used {} prompt + {} completion tokens",
                response.model, usage.prompt_tokens, usage.completion_tokens
            );
        }

        let text = response
            .text()
            .ok_or_else(|| Error::llm("Model returned an empty completion"))?;

        parse_model_output(text)
    }
}

/// Strips code fences from raw model text, parses it as JSON and checks the
/// result against `T`'s validation rules.
pub fn parse_model_output<T>(raw: &str) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let payload = strip_code_fence(raw);

    let value: T = serde_json::from_str(payload)
        .map_err(|e| Error::format(format!("response is not the expected JSON: {}", e)))?;

    value
        .validate()
        .map_err(|e| Error::format(format!("response failed schema validation: {}", e)))?;

    Ok(value)
}
