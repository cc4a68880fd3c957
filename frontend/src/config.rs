use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use shared::ClientConfig;

/// Local-storage key holding a JSON object of `ClientConfig` overrides.
const CONFIG_STORAGE_KEY: &str = "detector_config";

pub fn load_config() -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Some(api_base) = option_env!("DETECTOR_API_BASE") {
        config = config.with_api_base(api_base);
    }

    match LocalStorage::get::<serde_json::Value>(CONFIG_STORAGE_KEY) {
        Ok(overrides) => match config.merged_with(overrides) {
            Ok(merged) => {
                log::info!("Applied stored client config overrides");
                merged
            }
            Err(e) => {
                log::warn!("Ignoring malformed `{}`: {}", CONFIG_STORAGE_KEY, e);
                config
            }
        },
        Err(StorageError::KeyNotFound(_)) => config,
        Err(e) => {
            log::warn!("Could not read `{}`: {}", CONFIG_STORAGE_KEY, e);
            config
        }
    }
}
