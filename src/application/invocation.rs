//! Argument lists for the two Ansible steps

use std::path::Path;

use crate::config::{GalaxySettings, PlaybookSettings};
use crate::domain::ports::Invocation;

/// `ansible-galaxy install -r <requirements> --force`
pub fn galaxy_install(settings: &GalaxySettings) -> Invocation {
    Invocation::new(&settings.program)
        .arg("install")
        .arg("-r")
        .arg(&settings.requirements)
        .arg("--force")
}

/// `ansible-playbook` with the generated inventory and vars
///
/// `extra_args` are appended verbatim after the generated options.
pub fn playbook(
    settings: &PlaybookSettings,
    inventory: &Path,
    vars: &Path,
    offline: bool,
    extra_args: &[String],
) -> Invocation {
    let mut vars_ref = std::ffi::OsString::from("@");
    vars_ref.push(vars);

    let mut invocation = Invocation::new(&settings.program)
        .arg("-i")
        .arg(&settings.default_inventory)
        .arg("-i")
        .arg(inventory)
        .arg("-e")
        .arg(vars_ref);

    if !has_user_override(extra_args) {
        invocation = invocation.arg("-u").arg(&settings.default_user);
    }
    if offline {
        invocation = invocation
            .arg("--module-path")
            .arg(&settings.offline_module_path);
    }

    invocation.args(extra_args)
}

/// Whether the pass-through args already choose the remote user
pub fn has_user_override(args: &[String]) -> bool {
    args.iter().any(|arg| {
        arg == "-u"
            || arg == "--user"
            || arg.starts_with("--user=")
            || (arg.starts_with("-u") && !arg.starts_with("--"))
    })
}
