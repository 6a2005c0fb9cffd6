//! Deployment descriptions shared by the contract tests.

/// Core deployment with one server per singleton group
pub const CORE_DEPLOYMENT: &str = r#"
servers:
  - name: brain1
    ip: 10.0.0.1
    ansible_groups: [brain]
  - name: fe1
    ip: 10.0.0.2
    ansible_groups: [frontend, sql-server]
  - name: probe1
    ip: 10.0.0.3
    ansible_groups: [probe, monitoring-core]
    windows: true
ansible_vars:
  monitoring: true
"#;

/// Core deployment where frontend and database live on separate hosts
pub const SPLIT_DB_DEPLOYMENT: &str = r#"
servers:
  - name: brain1
    ip: 10.0.0.1
    ansible_groups: [brain]
  - name: fe1
    ip: 10.0.0.2
    ansible_groups: [frontend]
  - name: db1
    ip: 10.0.0.4
    ansible_groups: [sql-server]
"#;

/// Core deployment with two brains
pub const TWO_BRAINS_DEPLOYMENT: &str = r#"
servers:
  - name: brain1
    ip: 10.0.0.1
    ansible_groups: [brain]
  - name: brain2
    ip: 10.0.0.5
    ansible_groups: [brain]
  - name: fe1
    ip: 10.0.0.2
    ansible_groups: [frontend, sql-server]
"#;

/// Two entries share a name
pub const DUPLICATE_DEPLOYMENT: &str = r#"
servers:
  - name: brain1
    ip: 10.0.0.1
    ansible_groups: [brain]
  - name: brain1
    ip: 10.0.0.9
    ansible_groups: [frontend]
"#;

/// Kiosk deployment, the windows flag is not a boolean and must be ignored
pub const KIOSK_DEPLOYMENT: &str = r#"
servers:
  - name: kiosk1
    ip: 127.0.0.1
    ansible_groups: [kiosk]
    windows: sometimes
"#;
