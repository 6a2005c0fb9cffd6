//! Recognized deployment variables
//!
//! User vars are free-form and passed through untouched. The keys below are
//! the ones this tool reads or injects itself.

use serde_yaml_ng::Value;

/// How a recognized variable gets its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarSource {
    /// Set from a command line flag
    Flag,
    /// Supplied by the user in `ansible_vars`
    User,
    /// Derived from the address of a singleton group
    Derived,
}

/// A variable key with known meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeploymentVar {
    Offline,
    BrainAddr,
    FrontendAddr,
    SqlAddr,
    Monitoring,
    MonitoringAddr,
}

impl DeploymentVar {
    pub const ALL: [DeploymentVar; 6] = [
        DeploymentVar::Offline,
        DeploymentVar::BrainAddr,
        DeploymentVar::FrontendAddr,
        DeploymentVar::SqlAddr,
        DeploymentVar::Monitoring,
        DeploymentVar::MonitoringAddr,
    ];

    /// Key as it appears in the vars file
    pub fn key(&self) -> &'static str {
        match self {
            DeploymentVar::Offline => "offline",
            DeploymentVar::BrainAddr => "brain_addr",
            DeploymentVar::FrontendAddr => "frontend_addr",
            DeploymentVar::SqlAddr => "sql_addr",
            DeploymentVar::Monitoring => "monitoring",
            DeploymentVar::MonitoringAddr => "monitoring_addr",
        }
    }

    pub fn source(&self) -> VarSource {
        match self {
            DeploymentVar::Offline => VarSource::Flag,
            DeploymentVar::Monitoring => VarSource::User,
            _ => VarSource::Derived,
        }
    }

    /// Group whose single member provides the address, for derived vars
    pub fn group(&self) -> Option<&'static str> {
        match self {
            DeploymentVar::BrainAddr => Some("brain"),
            DeploymentVar::FrontendAddr => Some("frontend"),
            DeploymentVar::SqlAddr => Some("sql-server"),
            DeploymentVar::MonitoringAddr => Some("monitoring-core"),
            DeploymentVar::Offline | DeploymentVar::Monitoring => None,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|var| var.key() == key)
    }
}

impl std::fmt::Display for DeploymentVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// YAML 1.1 boolean spellings that YAML 1.2 loads as plain strings
const FALSE_SPELLINGS: &[&str] = &[
    "n", "N", "no", "No", "NO", "off", "Off", "OFF", "false", "False", "FALSE",
];

/// YAML truthiness: null, false, zero and empty values are falsy
///
/// Strings spelling a YAML 1.1 false (`no`, `off`, `n`...) are falsy too.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i != 0
            } else if let Some(u) = n.as_u64() {
                u != 0
            } else {
                n.as_f64().is_some_and(|f| f != 0.0)
            }
        }
        Value::String(s) => !s.is_empty() && !FALSE_SPELLINGS.contains(&s.as_str()),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}
