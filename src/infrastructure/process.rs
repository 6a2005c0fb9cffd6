//! System process runner
//!
//! Spawns the external programs with inherited stdio and waits for them.

use std::process::{Command, ExitStatus};

use tracing::{debug, info};

use crate::domain::ports::{Invocation, ProcessRunner};
use crate::error::{IrmaError, IrmaResult};

/// Runs invocations as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &Invocation) -> IrmaResult<i32> {
        info!(command = %invocation, "launching");
        let status = Command::new(invocation.program())
            .args(invocation.arguments())
            .status()
            .map_err(|source| IrmaError::Spawn {
                program: invocation.program().to_string(),
                source,
            })?;

        let code = exit_code(status);
        debug!(program = invocation.program(), code, "process exited");
        Ok(code)
    }
}

/// Exit code of a finished process; signals map to 128 + signal on Unix
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
