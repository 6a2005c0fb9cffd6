//! Run Use Case
//!
//! Orchestrates one invocation of the tool:
//! 1. Create the scratch directory
//! 2. Render and write the vars file, then the inventory
//! 3. Run `ansible-galaxy` (unless skipped), aborting on failure
//! 4. Run `ansible-playbook` (unless skipped)
//! 5. Remove the scratch directory
//!
//! The scratch directory is released on every path, including errors.

use std::path::PathBuf;

use tracing::{debug, info};

use super::invocation;
use crate::config::Settings;
use crate::domain::entities::Deployment;
use crate::domain::ports::{
    ArtifactKind, Invocation, ProcessRunner, RunEvent, RunEventSink, RunStep,
};
use crate::domain::services::{InventoryRenderer, VarsRenderer};
use crate::error::{IrmaError, IrmaResult};
use crate::infrastructure::artifacts::{write_artifact, ScratchDir};

/// Scratch file names for the two artifacts
pub const SCRATCH_VARS_FILE: &str = "vars.yml";
pub const SCRATCH_INVENTORY_FILE: &str = "inventory";

/// Options for a run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Skip `ansible-galaxy`
    pub skip_galaxy: bool,
    /// Skip `ansible-playbook`
    pub skip_playbook: bool,
    /// Do not inject address variables
    pub no_vars_address: bool,
    /// Offline installation
    pub offline: bool,
    /// Forwarded verbatim to `ansible-playbook`
    pub playbook_args: Vec<String>,
    /// Where inspect-only outputs are written
    pub output_dir: PathBuf,
    /// Parent of the scratch directory (system temp dir if unset)
    pub scratch_root: Option<PathBuf>,
}

impl RunOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            skip_galaxy: false,
            skip_playbook: false,
            no_vars_address: false,
            offline: false,
            playbook_args: Vec::new(),
            output_dir: output_dir.into(),
            scratch_root: None,
        }
    }

    pub fn with_skip_galaxy(mut self, skip: bool) -> Self {
        self.skip_galaxy = skip;
        self
    }

    pub fn with_skip_playbook(mut self, skip: bool) -> Self {
        self.skip_playbook = skip;
        self
    }

    pub fn with_no_vars_address(mut self, no_vars_address: bool) -> Self {
        self.no_vars_address = no_vars_address;
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_playbook_args(mut self, args: Vec<String>) -> Self {
        self.playbook_args = args;
        self
    }

    pub fn with_scratch_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scratch_root = Some(root.into());
        self
    }

    /// Both external steps skipped: outputs are kept for inspection
    pub fn is_inspect_only(&self) -> bool {
        self.skip_galaxy && self.skip_playbook
    }
}

/// Result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// 0, or the exit code of the failing step
    pub exit_code: i32,
    pub vars_path: PathBuf,
    pub inventory_path: PathBuf,
    /// Scratch directory used by the run (already removed)
    pub scratch_path: PathBuf,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run use case
pub struct RunUseCase<'a, P, E>
where
    P: ProcessRunner,
    E: RunEventSink + ?Sized,
{
    settings: &'a Settings,
    runner: P,
    events: &'a E,
}

impl<'a, P, E> RunUseCase<'a, P, E>
where
    P: ProcessRunner,
    E: RunEventSink + ?Sized,
{
    pub fn new(settings: &'a Settings, runner: P, events: &'a E) -> Self {
        Self {
            settings,
            runner,
            events,
        }
    }

    pub fn execute(&self, deployment: &Deployment, options: &RunOptions) -> IrmaResult<RunOutcome> {
        if options.is_inspect_only() && deployment.name().is_empty() {
            return Err(IrmaError::UnnamedDeployment);
        }

        let scratch = ScratchDir::create(options.scratch_root.as_deref())?;

        let (vars_path, inventory_path) = if options.is_inspect_only() {
            (
                options
                    .output_dir
                    .join(format!("{}.vars.yml", deployment.name())),
                options.output_dir.join(format!("{}.hosts", deployment.name())),
            )
        } else {
            (
                scratch.join(SCRATCH_VARS_FILE),
                scratch.join(SCRATCH_INVENTORY_FILE),
            )
        };

        let vars = VarsRenderer::new(options.offline, options.no_vars_address).render(deployment)?;
        write_artifact(&vars_path, &vars.to_yaml()?)?;
        self.emit(RunEvent::ArtifactWritten {
            kind: ArtifactKind::Vars,
            path: vars_path.clone(),
        });

        write_artifact(&inventory_path, &InventoryRenderer::render(deployment))?;
        self.emit(RunEvent::ArtifactWritten {
            kind: ArtifactKind::Inventory,
            path: inventory_path.clone(),
        });

        let mut outcome = RunOutcome {
            exit_code: 0,
            vars_path,
            inventory_path,
            scratch_path: scratch.path().to_path_buf(),
        };

        if !options.skip_galaxy {
            let galaxy = invocation::galaxy_install(&self.settings.galaxy);
            outcome.exit_code = self.step(RunStep::Galaxy, &galaxy)?;
        }

        if outcome.exit_code == 0 && !options.skip_playbook {
            let playbook = invocation::playbook(
                &self.settings.playbook,
                &outcome.inventory_path,
                &outcome.vars_path,
                options.offline,
                &options.playbook_args,
            );
            outcome.exit_code = self.step(RunStep::Playbook, &playbook)?;
        }

        scratch.close();
        info!(exit_code = outcome.exit_code, "run finished");
        self.emit(RunEvent::Completed {
            exit_code: outcome.exit_code,
        });
        Ok(outcome)
    }

    fn step(&self, step: RunStep, invocation: &Invocation) -> IrmaResult<i32> {
        self.emit(RunEvent::StepStarted {
            step,
            command: invocation.to_string(),
        });
        let exit_code = self.runner.run(invocation)?;
        debug!(step = step.label(), exit_code, "step finished");
        self.emit(RunEvent::StepFinished { step, exit_code });
        Ok(exit_code)
    }

    fn emit(&self, event: RunEvent) {
        self.events.on_event(event);
    }
}
