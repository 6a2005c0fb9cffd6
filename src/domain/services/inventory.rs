//! Inventory rendering
//!
//! Builds the INI-style Ansible inventory: one host line per server, then a
//! section per group tag.

use crate::domain::entities::{Deployment, Server};
use crate::domain::value_objects::Profile;

/// Key file vagrant boxes accept out of the box
pub const INSECURE_PRIVATE_KEY: &str = "'~/.vagrant.d/insecure_private_key'";

/// Fixed WinRM settings for Windows hosts
pub const WINRM_PORT: u16 = 5985;
pub const WINRM_PASSWORD: &str = "'vagrant'";

/// A host line: name followed by `key=value` tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLine {
    name: String,
    attributes: Vec<(&'static str, String)>,
}

impl HostLine {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attr(mut self, key: &'static str, value: impl ToString) -> Self {
        self.attributes.push((key, value.to_string()));
        self
    }

    /// Host line for a server, with connection attributes for its profile
    pub fn for_server(server: &Server, profile: Profile) -> Self {
        let line = Self::new(server.name()).attr("ansible_ssh_host", server.address());

        if profile.supports_windows() && server.is_windows() {
            return line
                .attr("ansible_ssh_port", WINRM_PORT)
                .attr("ansible_connection", "winrm")
                .attr("ansible_ssh_pass", WINRM_PASSWORD);
        }

        let line = if server.is_local() {
            line.attr("ansible_connection", "local")
        } else {
            line
        };
        line.attr("ansible_ssh_private_key_file", INSECURE_PRIVATE_KEY)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl std::fmt::Display for HostLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)?;
        for (key, value) in &self.attributes {
            write!(f, " {key}={value}")?;
        }
        Ok(())
    }
}

/// Renders a deployment as an Ansible inventory
pub struct InventoryRenderer;

impl InventoryRenderer {
    pub fn host_lines(deployment: &Deployment) -> Vec<HostLine> {
        deployment
            .servers()
            .iter()
            .map(|server| HostLine::for_server(server, deployment.profile()))
            .collect()
    }

    pub fn render(deployment: &Deployment) -> String {
        let mut out = String::new();

        for line in Self::host_lines(deployment) {
            out.push_str(&line.to_string());
            out.push('\n');
        }
        out.push('\n');

        let groups = deployment.groups();
        for group in groups.group_names() {
            out.push('[');
            out.push_str(group);
            out.push_str("]\n");
            for member in groups.unique_members(group) {
                out.push_str(member);
                out.push_str("\n\n");
            }
        }

        out
    }
}
