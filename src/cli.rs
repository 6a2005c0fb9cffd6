use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Create ansible inventory, vars file and run Ansible
#[derive(Parser, Debug)]
#[command(name = "irma-ansible")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Everything after <CONFIG_FILE> is passed to ansible-playbook.")]
pub struct Cli {
    /// Do not launch ansible-playbook
    #[arg(long = "no-ansible")]
    pub no_ansible: bool,

    /// Do not launch ansible-galaxy
    #[arg(long = "no-ansible-galaxy")]
    pub no_ansible_galaxy: bool,

    /// Do not generate ansible vars containing an address
    #[arg(long = "no-vars-address")]
    pub no_vars_address: bool,

    /// Perform an offline installation
    #[arg(long)]
    pub offline: bool,

    /// Emit NDJSON progress events
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Deployment description (yaml format)
    pub config_file: PathBuf,

    /// Options for ansible-playbook
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub ansible_args: Vec<String>,
}

/// Single-dash spellings still accepted by older wrappers
const LEGACY_FLAGS: &[(&str, &str)] = &[
    ("-na", "--no-ansible"),
    ("-ng", "--no-ansible-galaxy"),
    ("-nva", "--no-vars-address"),
];

/// Rewrite legacy flags and fence off the pass-through arguments
///
/// Only tokens before the config file are ours. A `--` is inserted right
/// after it so clap never interprets what follows.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut iter = args.into_iter().map(Into::into);

    if let Some(bin) = iter.next() {
        out.push(bin);
    }

    for arg in iter.by_ref() {
        let Some(text) = arg.to_str() else {
            out.push(arg);
            break;
        };

        if text == "--" {
            out.push(arg);
            break;
        }

        if let Some((_, long)) = LEGACY_FLAGS.iter().find(|(short, _)| *short == text) {
            out.push(OsString::from(*long));
            continue;
        }

        let is_positional = text == "-" || !text.starts_with('-');
        out.push(arg);
        if is_positional {
            out.push(OsString::from("--"));
            break;
        }
    }

    out.extend(iter);
    out
}
