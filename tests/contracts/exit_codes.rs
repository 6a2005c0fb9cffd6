//! Exit status contracts
//!
//! Stand-in scripts replace `ansible-galaxy` and `ansible-playbook` through
//! `IRMA_GALAXY_BIN` / `IRMA_PLAYBOOK_BIN`.

use crate::common::*;

/// Records its arguments and a copy of the inventory, then exits 5
const RECORDING_PLAYBOOK: &str = r#"printf '%s\n' "$@" > args.txt
cat "$4" > inventory.txt
exit 5"#;

fn recorded_args(env: &TestEnv) -> Vec<String> {
    env.read_project_file("args.txt")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn contract_playbook_exit_code_is_propagated() {
    let env = TestEnv::builder()
        .with_deployment("prod.yml", CORE_DEPLOYMENT)
        .build();
    let playbook = env.write_script("playbook.sh", RECORDING_PLAYBOOK);

    let result = env.run_with_env(
        &["prod.yml"],
        &[
            ("IRMA_GALAXY_BIN", "true"),
            ("IRMA_PLAYBOOK_BIN", playbook.to_str().unwrap()),
        ],
    );

    assert_eq!(result.exit_code, 5, "stderr: {}", result.stderr);
    assert_output_contains!(result, "ansible-playbook exited with code 5");
    assert!(env.tmp_is_empty(), "scratch directory left behind");

    let args = recorded_args(&env);
    assert_eq!(args[..3], ["-i", "default_groups", "-i"]);
    assert_eq!(args[4], "-e");
    assert!(args[5].starts_with('@') && args[5].ends_with("vars.yml"));
    assert_eq!(args[6..], ["-u", "vagrant"]);

    let inventory = env.read_project_file("inventory.txt");
    assert!(inventory.contains("[brain]\nbrain1\n"));
}

#[test]
fn contract_passthrough_args_follow_generated_ones() {
    let env = TestEnv::builder()
        .with_deployment("prod.yml", CORE_DEPLOYMENT)
        .build();
    let playbook = env.write_script("playbook.sh", RECORDING_PLAYBOOK);

    let result = env.run_with_env(
        &["-ng", "prod.yml", "--tags", "deploy", "-u", "admin"],
        &[("IRMA_PLAYBOOK_BIN", playbook.to_str().unwrap())],
    );

    assert_eq!(result.exit_code, 5, "stderr: {}", result.stderr);

    let args = recorded_args(&env);
    assert_eq!(args[6..], ["--tags", "deploy", "-u", "admin"]);
    assert!(!args.iter().any(|a| a == "vagrant"));
}

#[test]
fn contract_galaxy_failure_skips_playbook() {
    let env = TestEnv::builder()
        .with_deployment("prod.yml", CORE_DEPLOYMENT)
        .build();
    let playbook = env.write_script("playbook.sh", "touch ran.txt");

    let result = env.run_with_env(
        &["prod.yml"],
        &[
            ("IRMA_GALAXY_BIN", "false"),
            ("IRMA_PLAYBOOK_BIN", playbook.to_str().unwrap()),
        ],
    );

    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "ansible-galaxy exited with code 1");
    assert_not_generated!(env, "ran.txt");
    assert!(env.tmp_is_empty(), "scratch directory left behind");
}

#[test]
fn contract_missing_program_exits_one() {
    let env = TestEnv::builder()
        .with_deployment("prod.yml", CORE_DEPLOYMENT)
        .build();

    let result = env.run_with_env(
        &["-ng", "prod.yml"],
        &[("IRMA_PLAYBOOK_BIN", "/nonexistent/ansible-playbook")],
    );

    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "failed to launch");
    assert!(env.tmp_is_empty(), "scratch directory left behind");
}

#[test]
fn contract_default_user_comes_from_settings() {
    let env = TestEnv::builder()
        .with_deployment("prod.yml", CORE_DEPLOYMENT)
        .with_project_settings("[playbook]\ndefault_user = \"deploy\"\n")
        .build();
    let playbook = env.write_script("playbook.sh", RECORDING_PLAYBOOK);

    let result = env.run_with_env(
        &["-ng", "prod.yml"],
        &[("IRMA_PLAYBOOK_BIN", playbook.to_str().unwrap())],
    );

    assert_eq!(result.exit_code, 5, "stderr: {}", result.stderr);
    assert_eq!(recorded_args(&env)[6..], ["-u", "deploy"]);
}

#[test]
fn contract_unnamed_description_still_runs() {
    let env = TestEnv::builder()
        .with_deployment(".prod.yml", CORE_DEPLOYMENT)
        .build();

    let result = env.run_with_env(
        &[".prod.yml"],
        &[("IRMA_GALAXY_BIN", "true"), ("IRMA_PLAYBOOK_BIN", "true")],
    );

    assert!(result.success, "run failed: {}", result.stderr);
    assert!(env.tmp_is_empty(), "scratch directory left behind");
}
