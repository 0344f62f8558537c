// Configuration validation module

use std::path::PathBuf;

use crate::config::{
    load_config, AppConfig, ApplicationConfig, PageConfigYaml, PagerConfigYaml,
    StatusBarConfigYaml,
};

/// Load configuration with error recovery: a missing or malformed file
/// warns on stderr and falls back to the built-in defaults
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> AppConfig {
    match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load configuration: {}", e);
            eprintln!("Using default configuration");
            default_config()
        }
    }
}

/// Built-in configuration mirroring src/config.yaml
pub fn default_config() -> AppConfig {
    AppConfig {
        application: ApplicationConfig {
            title: "Tab Pager".to_string(),
            status_bar: StatusBarConfigYaml {
                default_text: "←/→ swipe · click a tab · q quit".to_string(),
            },
        },
        pager: PagerConfigYaml::default(),
        pages: (1..=9)
            .map(|i| PageConfigYaml {
                id: format!("item-{}", i),
                title: format!("Item {}", i),
                body: None,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_nine_pages() {
        let config = default_config();
        assert_eq!(config.pages.len(), 9);
        assert_eq!(config.pages[0].title, "Item 1");
        assert_eq!(
            config.pager.visible_tab_count,
            tab_pager::core::app_config::compiled::VISIBLE_TAB_COUNT
        );
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = load_and_validate_config(Some(PathBuf::from("/nonexistent/config.yaml")));
        assert_eq!(config.pages.len(), 9);
    }
}
