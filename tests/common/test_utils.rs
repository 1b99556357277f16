use super::mocks::MockLlmClient;
use axum::Router;
use chef_relay::{
    chef::Chef,
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    server,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            api_key: "test-api-key".to_string(),
            timeout_secs: 5,
            ..LlmConfig::default()
        },
    }
}

/// Build a chef around a mock client with the test configuration
pub fn create_test_chef(mock: Arc<MockLlmClient>) -> Chef {
    Chef::new(mock, &create_test_config().llm)
}

/// Build the full router around a mock client
pub fn create_test_app(mock: Arc<MockLlmClient>) -> Router {
    server::router(Arc::new(create_test_chef(mock)))
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content)
        .await
        .expect("Failed to write config file");
    config_path.to_string_lossy().to_string()
}

/// A complete recipe in the wire format the model is asked for
pub fn sample_recipe(name: &str) -> Value {
    json!({
        "yemekAdi": name,
        "aciklama": "Kısa, iştah açıcı bir açıklama",
        "sure": "45 dk",
        "kalori": "350 kcal",
        "malzemeler": ["domates", "biber", "soğan"],
        "tarif": ["Adım 1: Sebzeleri doğra", "Adım 2: Pişir"],
        "image_prompt": format!("{} nefis yemek sunumu", name)
    })
}

pub fn sample_menu() -> Value {
    json!({
        "menu": [
            sample_recipe("Mercimek Çorbası"),
            sample_recipe("Hünkar Beğendi"),
            sample_recipe("Sütlaç")
        ]
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: "debug"

llm:
  base_url: "https://api.openai.com/v1"
  api_key: "file-api-key"
  model: "gpt-4o-mini"
  temperature: 0.4
  timeout_secs: 10
  system_prompt: "Sen Türk mutfağında uzman bir şefsin."
"#;

/// Configuration that leaves the API key to the environment
pub const CONFIG_WITHOUT_KEY_YAML: &str = r#"
server:
  port: 8080

llm:
  model: "gemini-2.0-flash"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
