//! Deployment entity - the parsed deployment description
//!
//! Built once per invocation by the config loader; immutable afterwards.
//! Construction enforces server name uniqueness.

use serde_yaml_ng::Mapping;

use super::{GroupIndex, Server};
use crate::domain::value_objects::Profile;
use crate::error::{IrmaError, IrmaResult};

/// A validated deployment description
#[derive(Debug, Clone, PartialEq)]
pub struct Deployment {
    profile: Profile,
    name: String,
    servers: Vec<Server>,
    raw_vars: Mapping,
    groups: GroupIndex,
}

impl Deployment {
    /// Create a deployment, rejecting duplicate server names
    pub fn new(
        profile: Profile,
        name: impl Into<String>,
        servers: Vec<Server>,
        raw_vars: Mapping,
    ) -> IrmaResult<Self> {
        for (i, server) in servers.iter().enumerate() {
            if servers[..i].iter().any(|s| s.name() == server.name()) {
                return Err(IrmaError::DuplicateServer {
                    name: server.name().to_string(),
                });
            }
        }

        let groups = GroupIndex::build(&servers);
        Ok(Self {
            profile,
            name: name.into(),
            servers,
            raw_vars,
            groups,
        })
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Name derived from the description file, used for inspect-only outputs
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn server(&self, name: &str) -> Option<&Server> {
        self.servers.iter().find(|s| s.name() == name)
    }

    /// User supplied `ansible_vars`
    pub fn raw_vars(&self) -> &Mapping {
        &self.raw_vars
    }

    pub fn groups(&self) -> &GroupIndex {
        &self.groups
    }

    /// Address of the single server tagged `group`
    pub fn singleton_address(&self, group: &str) -> IrmaResult<&str> {
        let name = self.groups.singleton(group)?;
        self.server(name)
            .map(Server::address)
            .ok_or_else(|| IrmaError::InvalidConfig {
                message: format!("group {group} references unknown server {name}"),
            })
    }
}
