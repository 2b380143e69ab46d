//! Config layering through `ConfigLoader` and provider resolution.

use brandkit::config::{ConfigLoader, ProviderType, WORKSPACE_CONFIG_FILE};
use brandkit::provider::{ModelProvider, ProviderFactory};
use brandkit::ApiError;
use std::sync::Mutex;
use tempfile::TempDir;

// Serializes tests that read or write BRANDKIT__* variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_environment_overrides_files() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(WORKSPACE_CONFIG_FILE),
        r#"
[provider]
provider_type = "openai"
model = "file-model"
"#,
    )
    .unwrap();

    std::env::set_var("BRANDKIT__PROVIDER__MODEL", "env-model");
    let config = ConfigLoader::load_layers(None, temp_dir.path(), None);
    std::env::remove_var("BRANDKIT__PROVIDER__MODEL");

    let config = config.unwrap();
    assert_eq!(config.provider.provider_type, ProviderType::OpenAI);
    assert_eq!(config.provider.model(), "env-model");
}

#[test]
fn test_workspace_config_builds_ollama_client() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(WORKSPACE_CONFIG_FILE),
        r#"
[provider]
provider_type = "ollama"
endpoint = "http://localhost:11434"

[provider.default_options]
top_p = 0.9
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_layers(None, temp_dir.path(), None).unwrap();
    config.ensure_valid().unwrap();
    assert_eq!(config.provider.default_options.top_p, Some(0.9));

    let provider = config.provider.to_model_provider().unwrap();
    match &provider {
        ModelProvider::Ollama { model, base_url } => {
            assert_eq!(model, "llama3.1");
            assert_eq!(base_url.as_deref(), Some("http://localhost:11434"));
        }
        other => panic!("unexpected provider: {:?}", other),
    }
    let client = ProviderFactory::create_client(&provider).unwrap();
    assert_eq!(client.provider_name(), "ollama");
    assert_eq!(client.model_name(), "llama3.1");
}

#[test]
fn test_api_key_from_named_env_var() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    std::fs::write(
        &config_file,
        r#"
[provider]
provider_type = "openai"
api_key_env = "BRANDKIT_TEST_OPENAI_KEY"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();

    std::env::remove_var("BRANDKIT_TEST_OPENAI_KEY");
    let err = config.provider.to_model_provider().unwrap_err();
    assert!(matches!(err, ApiError::ProviderNotConfigured(_)), "{:?}", err);
    assert!(err.to_string().contains("BRANDKIT_TEST_OPENAI_KEY"));

    std::env::set_var("BRANDKIT_TEST_OPENAI_KEY", "sk-test");
    let provider = config.provider.to_model_provider();
    std::env::remove_var("BRANDKIT_TEST_OPENAI_KEY");
    match provider.unwrap() {
        ModelProvider::OpenAI { api_key, model, .. } => {
            assert_eq!(api_key, "sk-test");
            assert_eq!(model, "gpt-4o-mini");
        }
        other => panic!("unexpected provider: {:?}", other),
    }
}

#[test]
fn test_invalid_temperature_fails_validation() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(WORKSPACE_CONFIG_FILE),
        "[provider.default_options]\ntemperature = 3.5\n",
    )
    .unwrap();

    let config = ConfigLoader::load_layers(None, temp_dir.path(), None).unwrap();
    let err = config.ensure_valid().unwrap_err();
    assert!(err.to_string().contains("Temperature must be between"));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(WORKSPACE_CONFIG_FILE), "[provider\n").unwrap();

    let err: ApiError = ConfigLoader::load_layers(None, temp_dir.path(), None)
        .unwrap_err()
        .into();
    assert!(matches!(err, ApiError::ConfigError(_)));
}
