use crate::config::{RelinkConfig, ScanConfig, StoreConfig, DEFAULT_CONCURRENCY};
use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{error, info};

#[derive(Deserialize)]
struct StaticConfig {
    scan: ScanSection,
    store: StoreSection,
}

#[derive(Deserialize)]
struct ScanSection {
    root_dir: std::path::PathBuf,
    #[serde(default = "default_extension")]
    extension: String,
    #[serde(default)]
    concurrency: Option<usize>,
}

fn default_extension() -> String {
    "md".to_string()
}

#[derive(Deserialize)]
struct StoreSection {
    endpoint: String,
    public_domain: String,
    key_prefix: String,
}

/// Loads a static YAML config file (no secrets) and injects required env vars
/// for secrets. Returns a fully merged RelinkConfig or an error.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RelinkConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(config_path = ?path_ref, "Config file read successfully");
            content
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    let static_conf: StaticConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            conf
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
        }
    };

    let api_token = match std::env::var("IMG_STORE_TOKEN") {
        Ok(token) => {
            info!("IMG_STORE_TOKEN found in env");
            token
        }
        Err(e) => {
            error!(error = ?e, "IMG_STORE_TOKEN environment variable not set");
            return Err(anyhow::anyhow!(
                "IMG_STORE_TOKEN environment variable not set: {e}"
            ));
        }
    };

    let concurrency = static_conf.scan.concurrency.unwrap_or(DEFAULT_CONCURRENCY);
    if concurrency == 0 {
        error!("scan.concurrency must be at least 1");
        anyhow::bail!("scan.concurrency must be at least 1");
    }

    let scan = ScanConfig {
        root_dir: static_conf.scan.root_dir,
        extension: static_conf.scan.extension,
        concurrency,
    };

    let store = StoreConfig {
        endpoint: static_conf.store.endpoint.trim_end_matches('/').to_string(),
        public_domain: static_conf.store.public_domain,
        key_prefix: static_conf.store.key_prefix,
        api_token,
    };

    info!(
        root_dir = %scan.root_dir.display(),
        endpoint = %store.endpoint,
        "Config loaded and merged successfully"
    );

    Ok(RelinkConfig { scan, store })
}
