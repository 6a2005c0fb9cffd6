//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod deployment_var;
mod profile;
mod resolved_vars;

pub use deployment_var::{is_truthy, DeploymentVar, VarSource};
pub use profile::Profile;
pub use resolved_vars::ResolvedVars;
