//! Vars rendering
//!
//! Seeds the vars mapping from the user's `ansible_vars` and injects the
//! offline flag plus, for core deployments, the addresses of the singleton
//! roles.

use serde_yaml_ng::Mapping;
use tracing::{debug, warn};

use crate::domain::entities::Deployment;
use crate::domain::value_objects::{DeploymentVar, ResolvedVars, VarSource};
use crate::error::IrmaResult;

/// Renders the variables handed to `ansible-playbook`
#[derive(Debug, Clone, Copy, Default)]
pub struct VarsRenderer {
    offline: bool,
    suppress_address_vars: bool,
}

impl VarsRenderer {
    pub fn new(offline: bool, suppress_address_vars: bool) -> Self {
        Self {
            offline,
            suppress_address_vars,
        }
    }

    pub fn render(&self, deployment: &Deployment) -> IrmaResult<ResolvedVars> {
        let vars = self.resolve(deployment)?;
        for var in replaced_user_keys(deployment.raw_vars(), &vars) {
            warn!(key = var.key(), "ansible_vars value replaced by the generated one");
        }
        Ok(vars)
    }

    fn resolve(&self, deployment: &Deployment) -> IrmaResult<ResolvedVars> {
        let mut vars = ResolvedVars::from_raw(deployment.raw_vars());
        vars.set(DeploymentVar::Offline, self.offline);

        if !deployment.profile().derives_addresses() || self.suppress_address_vars {
            return Ok(vars);
        }

        let address = |var: DeploymentVar| -> IrmaResult<String> {
            let group = var.group().unwrap_or_default();
            deployment.singleton_address(group).map(str::to_string)
        };

        vars.set(DeploymentVar::BrainAddr, address(DeploymentVar::BrainAddr)?);

        let frontend = address(DeploymentVar::FrontendAddr)?;
        let sql = address(DeploymentVar::SqlAddr)?;
        if frontend != sql {
            debug!(%frontend, %sql, "standalone SQL server");
            vars.set(DeploymentVar::FrontendAddr, frontend);
            vars.set(DeploymentVar::SqlAddr, sql);
        }

        if vars.is_enabled(DeploymentVar::Monitoring) {
            vars.set(
                DeploymentVar::MonitoringAddr,
                address(DeploymentVar::MonitoringAddr)?,
            );
        }

        Ok(vars)
    }
}

/// Recognized keys set in `ansible_vars` whose value the tool replaced
pub fn replaced_user_keys(raw: &Mapping, vars: &ResolvedVars) -> Vec<DeploymentVar> {
    raw.iter()
        .filter_map(|(key, value)| {
            let var = key.as_str().and_then(DeploymentVar::from_key)?;
            let replaced = var.source() != VarSource::User && vars.get_var(var) != Some(value);
            replaced.then_some(var)
        })
        .collect()
}
