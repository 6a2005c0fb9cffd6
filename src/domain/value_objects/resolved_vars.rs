//! ResolvedVars - the mapping written to the Ansible vars file

use serde_yaml_ng::{Mapping, Value};

use super::deployment_var::{is_truthy, DeploymentVar};
use crate::error::IrmaResult;

/// Variables handed to `ansible-playbook -e @file`
///
/// Keeps the insertion order of the user mapping, injected keys are
/// appended (or overwrite the user value in place).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedVars {
    values: Mapping,
}

impl ResolvedVars {
    /// Seed from the user supplied `ansible_vars`
    pub fn from_raw(raw: &Mapping) -> Self {
        Self { values: raw.clone() }
    }

    pub fn set(&mut self, var: DeploymentVar, value: impl Into<Value>) {
        self.values
            .insert(Value::String(var.key().to_string()), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_var(&self, var: DeploymentVar) -> Option<&Value> {
        self.get(var.key())
    }

    /// String value of a recognized variable, if it holds one
    pub fn get_str(&self, var: DeploymentVar) -> Option<&str> {
        self.get_var(var).and_then(Value::as_str)
    }

    pub fn contains(&self, var: DeploymentVar) -> bool {
        self.values.contains_key(var.key())
    }

    /// Present and truthy
    pub fn is_enabled(&self, var: DeploymentVar) -> bool {
        self.get_var(var).is_some_and(is_truthy)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.values
    }

    /// Serialize as a YAML document with an explicit `---` start
    pub fn to_yaml(&self) -> IrmaResult<String> {
        let body = serde_yaml_ng::to_string(self.as_mapping())?;
        Ok(format!("---\n{body}"))
    }
}
