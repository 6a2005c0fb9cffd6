//! Domain Services
//!
//! Pure rendering logic over a `Deployment`. No I/O.

mod inventory;
mod vars;

pub use inventory::{HostLine, InventoryRenderer, INSECURE_PRIVATE_KEY, WINRM_PASSWORD, WINRM_PORT};
pub use vars::{replaced_user_keys, VarsRenderer};
