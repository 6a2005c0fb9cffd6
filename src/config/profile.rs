//! Profile selector file
//!
//! A one-line file in the working directory naming the deployment profile.

use std::fs;
use std::path::Path;

use crate::domain::value_objects::Profile;
use crate::error::{IrmaError, IrmaResult};

/// Default location of the selector, relative to the working directory
pub const DEFAULT_PROFILE_FILE: &str = "irma-ansible.cfg";

/// Read the profile from its first line
pub fn read_profile(path: &Path) -> IrmaResult<Profile> {
    let content = fs::read_to_string(path).map_err(|_| IrmaError::ProfileFileMissing {
        path: path.to_path_buf(),
    })?;
    parse_profile(&content)
}

pub fn parse_profile(content: &str) -> IrmaResult<Profile> {
    content.lines().next().unwrap_or_default().trim_end().parse()
}
