//! Run Event Port
//!
//! Progress reporting for a run. The use case emits events; presentation
//! decides how (and whether) to show them.

use std::path::PathBuf;

/// Which generated file an event is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Vars,
    Inventory,
}

impl ArtifactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Vars => "vars",
            ArtifactKind::Inventory => "inventory",
        }
    }
}

/// External step of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStep {
    /// `ansible-galaxy install`
    Galaxy,
    /// `ansible-playbook`
    Playbook,
}

impl RunStep {
    pub fn label(&self) -> &'static str {
        match self {
            RunStep::Galaxy => "ansible-galaxy",
            RunStep::Playbook => "ansible-playbook",
        }
    }
}

/// Event emitted during a run
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// A generated file was written
    ArtifactWritten { kind: ArtifactKind, path: PathBuf },

    /// An external step is about to start
    StepStarted { step: RunStep, command: String },

    /// An external step exited
    StepFinished { step: RunStep, exit_code: i32 },

    /// The run is over and the scratch directory released
    Completed { exit_code: i32 },
}

/// Trait for receiving run events
pub trait RunEventSink {
    fn on_event(&self, event: RunEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RunEventSink for NoopEventSink {
    fn on_event(&self, _event: RunEvent) {}
}

/// Event sink that records everything, for tests
#[derive(Default)]
pub struct RecordingEventSink {
    events: std::sync::Mutex<Vec<RunEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RunEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl RunEventSink for RecordingEventSink {
    fn on_event(&self, event: RunEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
