//! Domain Entities
//!
//! - `Deployment` - A validated deployment description
//! - `Server` - One host of the deployment
//! - `GroupIndex` - Group tags and their member servers

mod deployment;
mod group_index;
mod server;

pub use deployment::Deployment;
pub use group_index::GroupIndex;
pub use server::Server;
