//! Tool settings
//!
//! Settings hierarchy (highest priority first):
//! 1. Environment variables (IRMA_*)
//! 2. Project settings (./irma-ansible.toml)
//! 3. User settings (~/.config/irma-ansible/config.toml)
//! 4. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::profile::DEFAULT_PROFILE_FILE;
use crate::error::{IrmaError, IrmaResult};

/// Project settings file name
pub const PROJECT_SETTINGS_FILE: &str = "irma-ansible.toml";

/// Minimum Jaro-Winkler score for a "did you mean" hint
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Profile selector file
    pub profile_file: PathBuf,
    pub galaxy: GalaxySettings,
    pub playbook: PlaybookSettings,
}

/// `ansible-galaxy` step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxySettings {
    pub program: String,
    /// Roles requirements file passed to `-r`
    pub requirements: PathBuf,
}

/// `ansible-playbook` step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybookSettings {
    pub program: String,
    /// Static inventory listing the default groups
    pub default_inventory: PathBuf,
    /// Remote user, unless the pass-through args set one
    pub default_user: String,
    /// `--module-path` value for offline installs
    pub offline_module_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile_file: PathBuf::from(DEFAULT_PROFILE_FILE),
            galaxy: GalaxySettings::default(),
            playbook: PlaybookSettings::default(),
        }
    }
}

impl Default for GalaxySettings {
    fn default() -> Self {
        Self {
            program: "ansible-galaxy".to_string(),
            requirements: PathBuf::from("ansible-requirements.yml"),
        }
    }
}

impl Default for PlaybookSettings {
    fn default() -> Self {
        Self {
            program: "ansible-playbook".to_string(),
            default_inventory: PathBuf::from("default_groups"),
            default_user: "vagrant".to_string(),
            offline_module_path: "ansible_plugins/modules:offline/ansible_modules/offline"
                .to_string(),
        }
    }
}

/// Unknown key found in a settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Settings {
    /// Resolve settings from project file, user file, defaults, then env
    pub fn load_or_default(project_root: &Path) -> IrmaResult<(Self, Vec<SettingsWarning>)> {
        let candidates = [
            Some(project_root.join(PROJECT_SETTINGS_FILE)),
            user_settings_path(),
        ];

        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                debug!(file = %path.display(), "loading settings");
                let (settings, warnings) = load_with_warnings(&path)?;
                return Ok((with_env_overrides(settings), warnings));
            }
        }

        Ok((with_env_overrides(Settings::default()), Vec::new()))
    }
}

/// Load settings and collect unknown keys
pub fn load_with_warnings(path: &Path) -> IrmaResult<(Settings, Vec<SettingsWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| IrmaError::InvalidSettings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown.push(p.to_string());
    })
    .map_err(|e| IrmaError::InvalidSettings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown
        .iter()
        .map(|dotted| {
            let (table, key) = match dotted.rsplit_once('.') {
                Some((table, key)) => (Some(table), key),
                None => (None, dotted.as_str()),
            };
            SettingsWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: key_line(&content, table, key),
                suggestion: suggest_key(table, key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Apply environment variable overrides (IRMA_* prefix)
pub fn with_env_overrides(settings: Settings) -> Settings {
    with_overrides_from(settings, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup
pub fn with_overrides_from(
    mut settings: Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Settings {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(path) = non_empty("IRMA_PROFILE_FILE") {
        settings.profile_file = PathBuf::from(path);
    }
    if let Some(program) = non_empty("IRMA_GALAXY_BIN") {
        settings.galaxy.program = program;
    }
    if let Some(program) = non_empty("IRMA_PLAYBOOK_BIN") {
        settings.playbook.program = program;
    }
    if let Some(user) = non_empty("IRMA_DEFAULT_USER") {
        settings.playbook.default_user = user;
    }

    settings
}

fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("irma-ansible").join("config.toml"))
}

/// Keys accepted in each table; `None` is the top level
fn known_keys(table: Option<&str>) -> &'static [&'static str] {
    match table {
        None => &["profile_file", "galaxy", "playbook"],
        Some("galaxy") => &["program", "requirements"],
        Some("playbook") => &[
            "program",
            "default_inventory",
            "default_user",
            "offline_module_path",
        ],
        Some(_) => &[],
    }
}

/// Closest known key of the same table
fn suggest_key(table: Option<&str>, unknown: &str) -> Option<String> {
    known_keys(table)
        .iter()
        .map(|candidate| (*candidate, strsim::jaro_winkler(unknown, candidate)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(candidate, _)| candidate.to_string())
}

/// 1-based line of `key` inside `table`, or of the `[key]` header
fn key_line(content: &str, table: Option<&str>, key: &str) -> Option<usize> {
    let mut current: Option<&str> = None;
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let header = header.trim();
            if table.is_none() && header == key {
                return Some(i + 1);
            }
            current = Some(header);
            continue;
        }

        let assigned = line
            .split_once('=')
            .map(|(name, _)| name.trim().trim_matches('"'));
        if current == table && assigned == Some(key) {
            return Some(i + 1);
        }
    }
    None
}
