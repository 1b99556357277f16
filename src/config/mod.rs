mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`) and the process
/// environment, failing when the result is unusable.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    load_from(explicit_path.as_deref(), |key| env::var(key).ok()).await
}

/// Same as [`load`], with the config path and environment lookup supplied by
/// the caller.
pub async fn load_from<F>(config_path: Option<&str>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match config_path {
        Some(path) => read_file(path).await?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => read_file(DEFAULT_CONFIG_PATH).await?,
        None => {
            debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
            Config::default()
        }
    };

    config.apply_env_overrides(lookup)?;
    config.validate()?;

    Ok(config)
}

async fn read_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(api_key) = non_empty("OPENAI_API_KEY") {
            self.llm.api_key = api_key;
        }
        if let Some(base_url) = non_empty("LLM_BASE_URL") {
            self.llm.base_url = base_url;
        }
        if let Some(model) = non_empty("LLM_MODEL") {
            self.llm.model = model;
        }
        if let Some(port) = non_empty("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("PORT is not a valid port number: '{}'", port)))?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config(
                "API key is missing. Set OPENAI_API_KEY or llm.api_key in the config file",
            ));
        }
        if self.llm.timeout_secs == 0 {
            return Err(Error::config("llm.timeout_secs must be greater than zero"));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }

        Ok(())
    }
}
