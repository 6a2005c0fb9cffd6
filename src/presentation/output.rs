//! Output Rendering
//!
//! Event sinks turning run events into terminal lines or NDJSON.

use std::io::{self, Write};

use crossterm::style::Stylize;
use is_terminal::IsTerminal;

use crate::config::SettingsWarning;
use crate::domain::ports::{ArtifactKind, RunEvent, RunEventSink};

/// Human-readable progress lines
pub struct ConsoleEventSink {
    color: bool,
}

impl ConsoleEventSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colour only when stdout is a terminal and NO_COLOR is unset
    pub fn detect() -> Self {
        let color = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::new(color)
    }

    fn marker(&self, ok: bool) -> String {
        match (ok, self.color) {
            (true, true) => "[+]".green().to_string(),
            (false, true) => "[-]".red().to_string(),
            (true, false) => "[+]".to_string(),
            (false, false) => "[-]".to_string(),
        }
    }

    /// The line for an event, if it has one
    pub fn format(&self, event: &RunEvent) -> Option<String> {
        match event {
            RunEvent::ArtifactWritten { kind, path } => {
                let what = match kind {
                    ArtifactKind::Vars => "vars",
                    ArtifactKind::Inventory => "inventory",
                };
                Some(format!(
                    "{} Ansible {} written to {}",
                    self.marker(true),
                    what,
                    path.display()
                ))
            }
            RunEvent::StepStarted { step, .. } => {
                Some(format!("{} launching {}", self.marker(true), step.label()))
            }
            RunEvent::StepFinished { step, exit_code } if *exit_code != 0 => Some(format!(
                "{} {} exited with code {}",
                self.marker(false),
                step.label(),
                exit_code
            )),
            RunEvent::StepFinished { .. } | RunEvent::Completed { .. } => None,
        }
    }
}

impl RunEventSink for ConsoleEventSink {
    fn on_event(&self, event: RunEvent) {
        if let Some(line) = self.format(&event) {
            let failed = matches!(event, RunEvent::StepFinished { .. });
            if failed {
                eprintln!("{line}");
            } else {
                println!("{line}");
            }
        }
    }
}

/// NDJSON event stream on stdout
pub struct JsonEventSink;

impl JsonEventSink {
    pub fn to_json(event: &RunEvent) -> serde_json::Value {
        match event {
            RunEvent::ArtifactWritten { kind, path } => serde_json::json!({
                "event": "artifact_written",
                "kind": kind.label(),
                "path": path.display().to_string(),
            }),
            RunEvent::StepStarted { step, command } => serde_json::json!({
                "event": "step_started",
                "step": step.label(),
                "command": command,
            }),
            RunEvent::StepFinished { step, exit_code } => serde_json::json!({
                "event": "step_finished",
                "step": step.label(),
                "exit_code": exit_code,
            }),
            RunEvent::Completed { exit_code } => serde_json::json!({
                "event": "completed",
                "status": if *exit_code == 0 { "success" } else { "failure" },
                "exit_code": exit_code,
            }),
        }
    }
}

impl JsonEventSink {
    pub fn warning_to_json(warning: &SettingsWarning) -> serde_json::Value {
        serde_json::json!({
            "event": "warning",
            "kind": "unknown_settings_key",
            "key": warning.key,
            "file": warning.file.display().to_string(),
            "line": warning.line,
            "suggestion": warning.suggestion,
        })
    }
}

impl RunEventSink for JsonEventSink {
    fn on_event(&self, event: RunEvent) {
        let mut out = io::stdout().lock();
        let _ = write_event(&mut out, &Self::to_json(&event));
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Report unknown settings keys, as NDJSON on stdout in JSON mode
pub fn report_settings_warnings(warnings: &[SettingsWarning], json: bool) {
    if !json {
        print_settings_warnings(warnings);
        return;
    }

    let mut out = io::stdout().lock();
    for w in warnings {
        let _ = write_event(&mut out, &JsonEventSink::warning_to_json(w));
    }
}

/// Report unknown settings keys on stderr
pub fn print_settings_warnings(warnings: &[SettingsWarning]) {
    for w in warnings {
        match w.line {
            Some(line) => eprintln!(
                "⚠ Unknown settings key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            ),
            None => eprintln!("⚠ Unknown settings key '{}' in {}", w.key, w.file.display()),
        }
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}
