use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use todoview_engine::users::DEFAULT_USER_COUNT;
use todoview_engine::{PageSize, SortKey, StatusFilter, ViewParams};

pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TODOVIEW_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.todoview (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("TODOVIEW_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("todoview"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".todoview"));
    }

    anyhow::bail!(
        "Could not determine data directory: no HOME directory or XDG data directory found"
    )
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Defaults for the todo view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub page_size: PageSize,
    pub sort: SortKey,
    pub status: StatusFilter,
}

/// Generator settings for the user list demo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UsersConfig {
    pub count: u32,
    pub seed: u64,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_USER_COUNT,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub users: UsersConfig,
}

impl Config {
    /// Load `config.toml` from the data directory; a missing file yields defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_from(&data_dir.join(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Initial view parameters before any script action or flag
    pub fn view_params(&self) -> ViewParams {
        ViewParams::new()
            .with_page_size(self.view.page_size)
            .with_sort(self.view.sort)
            .with_status(self.view.status)
    }
}
