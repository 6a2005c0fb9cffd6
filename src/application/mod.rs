//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RunUseCase` - Render artifacts, run ansible-galaxy and ansible-playbook

pub mod invocation;
pub mod run;

pub use run::{RunOptions, RunOutcome, RunUseCase};
