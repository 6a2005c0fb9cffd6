//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use crate::application::RunUseCase;
use crate::config::Settings;
use crate::domain::ports::RunEventSink;
use crate::infrastructure::SystemProcessRunner;

use super::output::{ConsoleEventSink, JsonEventSink};

/// Type alias for the run use case spawning real processes
pub type ConcreteRunUseCase<'a> = RunUseCase<'a, SystemProcessRunner, dyn RunEventSink + 'a>;

/// Create a run use case with the system process runner
pub fn create_run_use_case<'a>(
    settings: &'a Settings,
    events: &'a (dyn RunEventSink + 'a),
) -> ConcreteRunUseCase<'a> {
    RunUseCase::new(settings, SystemProcessRunner::new(), events)
}

/// Event sink for the requested output mode
pub fn create_event_sink(json: bool) -> Box<dyn RunEventSink> {
    if json {
        Box::new(JsonEventSink)
    } else {
        Box::new(ConsoleEventSink::detect())
    }
}
