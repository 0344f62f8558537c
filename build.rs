// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        // Fallback defaults if config.yaml doesn't exist
        CompiledConfig::default()
    };

    // Generate Rust code with the compiled-in values
    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const VISIBLE_TAB_COUNT: i64 = {visible_tab_count};
pub const INDICATOR_COLOR: &str = "{indicator_color}";
pub const SWIPE_DURATION_MS: u64 = {swipe_duration_ms};
pub const MOUSE_ENABLED: bool = {mouse_enabled};
"#,
        visible_tab_count = config.visible_tab_count,
        indicator_color = config.indicator_color,
        swipe_duration_ms = config.swipe_duration_ms,
        mouse_enabled = config.mouse_enabled,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    visible_tab_count: i64,
    indicator_color: String,
    swipe_duration_ms: u64,
    mouse_enabled: bool,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            visible_tab_count: 5,
            indicator_color: "white".to_string(),
            swipe_duration_ms: 250,
            mouse_enabled: true,
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_pager = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Track which section we're in (a new top-level key ends the pager section)
        if line.starts_with("pager:") {
            in_pager = true;
            continue;
        } else if !line.starts_with(' ') && trimmed.ends_with(':') {
            in_pager = false;
            continue;
        }

        if !in_pager {
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            match key {
                "visible_tab_count" => {
                    config.visible_tab_count = value.parse().unwrap_or(5)
                }
                "indicator_color" => config.indicator_color = value.to_string(),
                "swipe_duration_ms" => {
                    config.swipe_duration_ms = value.parse().unwrap_or(250)
                }
                "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.splitn(2, ':');
    let key = parts.next()?.trim();
    let value = parts.next()?.trim().trim_matches('"');
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes" | "on" | "1")
}
