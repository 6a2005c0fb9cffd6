//! Deployment description loading
//!
//! Reads the YAML description, validates its shape and builds a
//! `Deployment`. The only side effect is reading the file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml_ng::{Mapping, Value};
use tracing::debug;

use crate::domain::entities::{Deployment, Server};
use crate::domain::value_objects::Profile;
use crate::error::{IrmaError, IrmaResult};

#[derive(Debug, Deserialize)]
struct RawDescription {
    servers: Option<Vec<RawServer>>,
    ansible_vars: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    name: Option<Value>,
    ip: Option<Value>,
    ansible_groups: Option<Vec<Value>>,
    windows: Option<Value>,
}

/// Load and validate a deployment description
pub fn load(path: &Path, profile: Profile) -> IrmaResult<Deployment> {
    let name = deployment_name(path);
    let content = fs::read_to_string(path).map_err(|source| IrmaError::ConfigRead {
        file: path.to_path_buf(),
        source,
    })?;

    let deployment = parse_with_origin(&content, &name, path, profile)?;
    debug!(
        file = %path.display(),
        name = deployment.name(),
        %profile,
        servers = deployment.servers().len(),
        groups = deployment.groups().len(),
        "loaded deployment description"
    );
    Ok(deployment)
}

/// Parse a description held in memory
pub fn parse_deployment(content: &str, name: &str, profile: Profile) -> IrmaResult<Deployment> {
    parse_with_origin(content, name, Path::new(name), profile)
}

/// Base file name up to its first dot: `prod.yml` -> `prod`
///
/// May be empty (`.prod.yml`); only inspect-only runs need a name.
pub fn deployment_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .and_then(|n| n.split('.').next().map(str::to_string))
        .unwrap_or_default()
}

fn parse_with_origin(
    content: &str,
    name: &str,
    origin: &Path,
    profile: Profile,
) -> IrmaResult<Deployment> {
    let value: Value = serde_yaml_ng::from_str(content).map_err(|e| IrmaError::InvalidYaml {
        file: origin.to_path_buf(),
        message: e.to_string(),
    })?;

    if !value.is_mapping() {
        return Err(IrmaError::InvalidConfig {
            message: format!("{} must contain a mapping at top level", origin.display()),
        });
    }

    let raw: RawDescription =
        serde_yaml_ng::from_value(value).map_err(|e| IrmaError::InvalidConfig {
            message: e.to_string(),
        })?;

    let raw_servers = raw.servers.ok_or_else(|| IrmaError::InvalidConfig {
        message: "missing 'servers' list".to_string(),
    })?;

    let servers = raw_servers
        .into_iter()
        .enumerate()
        .map(|(index, raw)| build_server(index, raw, profile))
        .collect::<IrmaResult<Vec<_>>>()?;

    let raw_vars = match raw.ansible_vars {
        None | Some(Value::Null) => Mapping::new(),
        Some(Value::Mapping(map)) => map,
        Some(_) => {
            return Err(IrmaError::InvalidConfig {
                message: "'ansible_vars' must be a mapping".to_string(),
            })
        }
    };

    Deployment::new(profile, name, servers, raw_vars)
}

fn build_server(index: usize, raw: RawServer, profile: Profile) -> IrmaResult<Server> {
    let name = required_scalar(index, "name", raw.name)?;
    let address = required_scalar(index, "ip", raw.ip)?;
    let groups = raw
        .ansible_groups
        .ok_or(IrmaError::MissingServerField {
            index,
            field: "ansible_groups",
        })?
        .iter()
        .map(|group| {
            scalar_string(group).ok_or_else(|| IrmaError::InvalidServerField {
                server: name.clone(),
                field: "ansible_groups",
                message: "group names must be scalars".to_string(),
            })
        })
        .collect::<IrmaResult<Vec<_>>>()?;

    let is_windows = if profile.supports_windows() {
        match raw.windows {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => b,
            Some(other) => {
                return Err(IrmaError::InvalidServerField {
                    server: name,
                    field: "windows",
                    message: format!("expected a boolean, found {other:?}"),
                })
            }
        }
    } else {
        false
    };

    Ok(Server::new(name, address, groups).with_windows(is_windows))
}

fn required_scalar(index: usize, field: &'static str, value: Option<Value>) -> IrmaResult<String> {
    match value {
        None | Some(Value::Null) => Err(IrmaError::MissingServerField { index, field }),
        Some(value) => scalar_string(&value).ok_or_else(|| IrmaError::InvalidServerField {
            server: format!("#{index}"),
            field,
            message: "expected a string".to_string(),
        }),
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
