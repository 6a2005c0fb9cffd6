//! irma-ansible CLI
//!
//! Usage: irma-ansible [OPTIONS] <CONFIG_FILE> [ANSIBLE_ARGS]...
//!
//! Writes the Ansible vars and inventory derived from CONFIG_FILE, runs
//! `ansible-galaxy install` and `ansible-playbook`, then cleans up.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use cli::{normalize_args, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    irma_ansible::logging::init(cli.verbose);

    // SIGINT also reaches the running ansible step; we wait for it to exit
    // and clean up afterwards.
    if let Err(e) =
        ctrlc::set_handler(|| tracing::warn!("interrupted, waiting for the running step"))
    {
        tracing::warn!(error = %e, "cannot install Ctrl+C handler");
    }

    match commands::cmd_run(&cli) {
        Ok(code) => exit_code(code),
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}
