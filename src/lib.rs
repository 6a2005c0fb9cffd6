//! irma-ansible - Ansible inventory and vars generator for IRMA deployments
//!
//! Reads a YAML deployment description, renders an Ansible inventory and a
//! vars file from it, then optionally runs `ansible-galaxy` and
//! `ansible-playbook` against them.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{RunOptions, RunOutcome, RunUseCase};
pub use config::{load, parse_deployment, read_profile, Settings};
pub use domain::entities::{Deployment, GroupIndex, Server};
pub use domain::services::{InventoryRenderer, VarsRenderer};
pub use domain::value_objects::{DeploymentVar, Profile, ResolvedVars};
pub use error::{IrmaError, IrmaResult};
