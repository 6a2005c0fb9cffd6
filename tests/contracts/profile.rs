//! Profile selector contracts
//!
//! The first line of `irma-ansible.cfg` picks `core` or `kiosk`; anything
//! else stops the run before the description is read.

use crate::common::*;

#[test]
fn contract_missing_selector_exits_with_message() {
    let env = TestEnv::builder()
        .without_profile()
        .with_deployment("prod.yml", CORE_DEPLOYMENT)
        .build();

    let result = env.run(&["-na", "-ng", "prod.yml"]);

    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "Missing configuration file");
    assert_not_generated!(env, "prod.hosts");
}

#[test]
fn contract_unknown_profile_is_rejected() {
    let env = TestEnv::builder()
        .with_profile("desktop")
        .with_deployment("prod.yml", CORE_DEPLOYMENT)
        .build();

    let result = env.run(&["-na", "-ng", "prod.yml"]);

    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "Bad configuration: desktop");
}

#[test]
fn contract_only_first_line_counts() {
    let env = TestEnv::builder()
        .with_profile("kiosk  \ncore")
        .with_deployment("booth.yml", KIOSK_DEPLOYMENT)
        .build();

    let result = env.run(&["-na", "-ng", "booth.yml"]);

    assert!(result.success, "run failed: {}", result.stderr);
    assert!(!env.read_project_file("booth.vars.yml").contains("brain_addr"));
}

#[test]
fn contract_selector_path_can_be_overridden() {
    let env = TestEnv::builder()
        .without_profile()
        .with_deployment("booth.yml", KIOSK_DEPLOYMENT)
        .build();
    env.write_project_file("profiles/site.cfg", "kiosk\n");

    let result = env.run_with_env(
        &["-na", "-ng", "booth.yml"],
        &[("IRMA_PROFILE_FILE", "profiles/site.cfg")],
    );

    assert!(result.success, "run failed: {}", result.stderr);
    assert_generated!(env, "booth.hosts");
}
