//! API key lookup: env var → .env in dir → public demo key.

use log::{debug, info};
use std::path::Path;

use crate::utils::config::ApiConsts;

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn try_env_then_dotenv(dir: &Path) -> Option<String> {
    if let Some(s) = non_empty_env(ApiConsts::API_KEY_ENV) {
        return Some(s);
    }
    let env_path = dir.join(".env");
    if env_path.is_file() {
        let _ = dotenvy::from_path(&env_path);
        return non_empty_env(ApiConsts::API_KEY_ENV);
    }
    None
}

/// Read the API key: env (`NASA_API_KEY`) → `.env` in `dir` → `DEMO_KEY`.
pub fn get_api_key(dir: &Path) -> String {
    match try_env_then_dotenv(dir) {
        Some(key) => {
            debug!("API key found in environment");
            key
        }
        None => {
            info!(
                "No {} set; using {} (rate limited)",
                ApiConsts::API_KEY_ENV,
                ApiConsts::DEMO_KEY
            );
            ApiConsts::DEMO_KEY.to_string()
        }
    }
}
