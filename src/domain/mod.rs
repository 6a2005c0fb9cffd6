//! Domain Layer
//!
//! Pure deployment model and rendering logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Deployment, Server, GroupIndex
//! - `value_objects/` - Profile, DeploymentVar, ResolvedVars
//! - `services/` - Inventory and vars renderers
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
