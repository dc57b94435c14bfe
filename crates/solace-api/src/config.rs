use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "com.solace.admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub inquiries: InquirySource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageConfig {
    Local {
        data_dir: PathBuf,
    },
    S3 {
        bucket: String,
        #[serde(default)]
        region: Option<String>,
    },
    Memory,
}

/// Where the inquiry list comes from.
///
/// `Remote` reads the enquiry service; status changes made here are kept in
/// the local collection and overlaid on the remote list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum InquirySource {
    #[default]
    Local,
    Remote {
        base_url: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|base| base.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("data"))
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::Local {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            bind_addr: default_bind_addr(),
            storage: StorageConfig::default(),
            inquiries: InquirySource::default(),
        }
    }
}

/// `$SOLACE_CONFIG`, or `config.json` in the platform config directory.
pub fn config_path() -> eyre::Result<PathBuf> {
    if let Ok(path) = std::env::var("SOLACE_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR).join("config.json"))
}

/// Load the config from [`config_path`] and apply environment overrides.
pub fn load_config() -> eyre::Result<AdminConfig> {
    let config = load_config_from(&config_path()?)?;
    Ok(apply_env_overrides(config, |name| std::env::var(name).ok()))
}

/// Load a config file. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> eyre::Result<AdminConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return Ok(AdminConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    // Out-of-range versions are treated as newer than any this build knows.
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX));

    let migrated = migrate(json, on_disk_version)?;
    let config: AdminConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update solace-api."
        ));
    }

    // v0 → v1: top-level `data_dir` moved into `storage`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(data_dir) = obj.remove("data_dir") {
            obj.entry("storage")
                .or_insert_with(|| serde_json::json!({ "type": "local", "data_dir": data_dir }));
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (data_dir moved into storage)");
    }

    Ok(json)
}

/// Apply `SOLACE_BIND_ADDR` and `SOLACE_DATA_DIR`.
///
/// `SOLACE_DATA_DIR` switches storage to the local backend.
pub fn apply_env_overrides(
    mut config: AdminConfig,
    var: impl Fn(&str) -> Option<String>,
) -> AdminConfig {
    if let Some(addr) = var("SOLACE_BIND_ADDR") {
        config.bind_addr = addr;
    }
    if let Some(dir) = var("SOLACE_DATA_DIR") {
        config.storage = StorageConfig::Local {
            data_dir: PathBuf::from(dir),
        };
    }
    config
}

pub fn save_config_to(path: &Path, config: &AdminConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
