//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod process_runner;
pub mod run_events;

pub use process_runner::{Invocation, ProcessRunner};
pub use run_events::{
    ArtifactKind, NoopEventSink, RecordingEventSink, RunEvent, RunEventSink, RunStep,
};
