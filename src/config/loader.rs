//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BoxpickError, BoxpickResult};

use super::types::{ColorMode, Config};

/// File name of the project configuration.
pub const CONFIG_FILE: &str = "boxpick.toml";

/// Known leaf keys, used for did-you-mean suggestions on unknown keys.
const KNOWN_KEYS: &[&str] = &["dir", "default_date", "color", "unicode"];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BoxpickResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BoxpickError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the project config, or fall back to defaults.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    load_or_default_with_warnings(project_root).0
}

/// Like [`load_or_default`], but also surfaces unknown-key warnings from
/// the project config so commands can print them.
pub fn load_or_default_with_warnings(
    project_root: Option<&Path>,
) -> (Config, Vec<ConfigWarning>) {
    if let Some(root) = project_root {
        let project_config = root.join(CONFIG_FILE);
        if project_config.exists() {
            if let Ok((config, warnings)) = load_with_warnings(&project_config) {
                return (with_env_overrides(config), warnings);
            }
        }
    }

    (with_env_overrides(Config::default()), Vec::new())
}

/// Apply environment variable overrides (BOXPICK_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(dir) = std::env::var("BOXPICK_DATA_DIR") {
        if !dir.is_empty() {
            config.data.dir = PathBuf::from(dir);
        }
    }

    if let Ok(date) = std::env::var("BOXPICK_DEFAULT_DATE") {
        if !date.is_empty() {
            config.pick.default_date = date;
        }
    }

    if let Ok(color) = std::env::var("BOXPICK_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .map(|rest| rest.trim_start().starts_with('='))
                .unwrap_or(false)
        })
        .map(|idx| idx + 1)
}

fn suggest_key(key: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (known, edit_distance(key, known)))
        .filter(|(known, dist)| *dist <= 2 && *dist < known.len())
        .min_by_key(|(_, dist)| *dist)
        .map(|(known, _)| known.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
