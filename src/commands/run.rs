use anyhow::{Context, Result};

use irma_ansible::config::{read_profile, Settings};
use irma_ansible::presentation::{
    create_event_sink, create_run_use_case, report_settings_warnings,
};
use irma_ansible::RunOptions;

use crate::cli::Cli;

/// Run command entry point, returns the process exit code
pub fn cmd_run(cli: &Cli) -> Result<i32> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;

    let (settings, warnings) = Settings::load_or_default(&cwd)?;
    report_settings_warnings(&warnings, cli.json);

    let profile = read_profile(&cwd.join(&settings.profile_file))?;
    tracing::debug!(%profile, "profile selected");

    let deployment = irma_ansible::load(&cli.config_file, profile)?;

    let options = RunOptions::new(&cwd)
        .with_skip_galaxy(cli.no_ansible_galaxy)
        .with_skip_playbook(cli.no_ansible)
        .with_no_vars_address(cli.no_vars_address)
        .with_offline(cli.offline)
        .with_playbook_args(cli.ansible_args.clone());

    let events = create_event_sink(cli.json);
    let outcome = create_run_use_case(&settings, events.as_ref()).execute(&deployment, &options)?;

    Ok(outcome.exit_code)
}
