//! Presentation Layer
//!
//! - `factory` - Creates use cases with proper dependencies
//! - `output` - Console and NDJSON event sinks

pub mod factory;
pub mod output;

pub use factory::{create_event_sink, create_run_use_case};
pub use output::{
    print_settings_warnings, report_settings_warnings, ConsoleEventSink, JsonEventSink,
};
