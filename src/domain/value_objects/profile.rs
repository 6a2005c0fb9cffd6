//! Profile value object - the deployment kind
//!
//! - `Core`: full multi-role deployment (brain, frontend, SQL, probes...)
//! - `Kiosk`: minimal single-role deployment

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IrmaError;

/// Deployment profile selected by the profile selector file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Full multi-role deployment
    Core,
    /// Minimal single-role deployment
    Kiosk,
}

impl Profile {
    /// Textual form used in the selector file
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Core => "core",
            Profile::Kiosk => "kiosk",
        }
    }

    /// Whether server entries may carry a `windows` flag
    pub fn supports_windows(&self) -> bool {
        matches!(self, Profile::Core)
    }

    /// Whether address variables are derived from singleton groups
    pub fn derives_addresses(&self) -> bool {
        matches!(self, Profile::Core)
    }
}

impl FromStr for Profile {
    type Err = IrmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(Profile::Core),
            "kiosk" => Ok(Profile::Kiosk),
            other => Err(IrmaError::InvalidProfile {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
