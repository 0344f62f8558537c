// Configuration loading module

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use tab_pager::core::app_config::compiled;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    #[serde(default)]
    pub pager: PagerConfigYaml,
    #[serde(default)]
    pub pages: Vec<PageConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    pub status_bar: StatusBarConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
}

/// Pager settings as written in YAML. The visible tab count is kept
/// signed here; out-of-range values resolve to the default later
/// instead of failing the parse.
#[derive(Debug, Clone, Deserialize)]
pub struct PagerConfigYaml {
    #[serde(default = "default_visible_tab_count")]
    pub visible_tab_count: i64,
    #[serde(default = "default_indicator_color")]
    pub indicator_color: String,
    #[serde(default = "default_swipe_duration_ms")]
    pub swipe_duration_ms: u64,
    #[serde(default = "default_mouse_enabled")]
    pub mouse_enabled: bool,
}

impl Default for PagerConfigYaml {
    fn default() -> Self {
        Self {
            visible_tab_count: default_visible_tab_count(),
            indicator_color: default_indicator_color(),
            swipe_duration_ms: default_swipe_duration_ms(),
            mouse_enabled: default_mouse_enabled(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfigYaml {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
}

// Missing pager keys fall back to the values build.rs compiled in from
// this same file, so the two config levels cannot drift apart
fn default_visible_tab_count() -> i64 {
    compiled::VISIBLE_TAB_COUNT
}

fn default_indicator_color() -> String {
    compiled::INDICATOR_COLOR.to_string()
}

fn default_swipe_duration_ms() -> u64 {
    compiled::SWIPE_DURATION_MS
}

fn default_mouse_enabled() -> bool {
    compiled::MOUSE_ENABLED
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let path = config_path.unwrap_or_else(|| {
        let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        default_path.push("src");
        default_path.push("config.yaml");
        default_path
    });

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config: AppConfig =
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })?;
    Ok(config)
}
