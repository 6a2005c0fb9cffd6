//! Configuration module for irma-ansible
//!
//! - `loader`: the YAML deployment description
//! - `profile`: the one-line profile selector file
//! - `settings`: tool settings (program names, fixed arguments)

pub mod loader;
pub mod profile;
pub mod settings;

pub use loader::{deployment_name, load, parse_deployment};
pub use profile::{parse_profile, read_profile, DEFAULT_PROFILE_FILE};
pub use settings::{
    with_env_overrides, GalaxySettings, PlaybookSettings, Settings, SettingsWarning,
    PROJECT_SETTINGS_FILE,
};
