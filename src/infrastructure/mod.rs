//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! - `artifacts` - Scratch directory and generated file writing
//! - `process` - Child process runner

pub mod artifacts;
pub mod process;

pub use artifacts::{write_artifact, ScratchDir, GENERATED_HEADER};
pub use process::SystemProcessRunner;
