//! Property tests for inventory rendering.

use std::collections::BTreeMap;

use proptest::prelude::*;
use serde_yaml_ng::Mapping;

use irma_ansible::{Deployment, InventoryRenderer, Profile, Server};

const TAGS: &[&str] = &["brain", "frontend", "sql-server", "monitoring", "probe"];

/// Servers `srv0..srvN`, each with up to four tags (repeats allowed)
fn servers() -> impl Strategy<Value = Vec<Server>> {
    proptest::collection::vec(
        (
            proptest::collection::vec(0..TAGS.len(), 0..=4),
            any::<bool>(),
        ),
        0..=8,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (tags, windows))| {
                Server::new(
                    format!("srv{}", i),
                    format!("10.0.0.{}", i + 1),
                    tags.into_iter().map(|t| TAGS[t]),
                )
                .with_windows(windows)
            })
            .collect()
    })
}

fn profile() -> impl Strategy<Value = Profile> {
    prop_oneof![Just(Profile::Core), Just(Profile::Kiosk)]
}

/// Split the rendered inventory into host lines and group sections
fn parse(rendered: &str) -> (Vec<String>, BTreeMap<String, Vec<String>>) {
    let mut lines = rendered.lines();
    let hosts: Vec<String> = lines
        .by_ref()
        .take_while(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let mut sections: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut current: Option<String> = None;
    for line in lines.filter(|line| !line.is_empty()) {
        if let Some(group) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            assert!(
                sections.insert(group.to_string(), Vec::new()).is_none(),
                "section [{}] rendered twice",
                group
            );
            current = Some(group.to_string());
        } else if let Some(group) = &current {
            sections
                .get_mut(group)
                .expect("section exists")
                .push(line.to_string());
        } else {
            panic!("member line outside of a section: {}", line);
        }
    }

    (hosts, sections)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every server has exactly one host line, in declaration order.
    #[test]
    fn property_one_host_line_per_server(servers in servers(), profile in profile()) {
        let names: Vec<String> = servers.iter().map(|s| s.name().to_string()).collect();
        let deployment = Deployment::new(profile, "prop", servers, Mapping::new()).unwrap();

        let (hosts, _) = parse(&InventoryRenderer::render(&deployment));
        let host_names: Vec<&str> = hosts
            .iter()
            .map(|line| line.split(' ').next().unwrap_or_default())
            .collect();

        prop_assert_eq!(host_names, names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// PROPERTY: each tag gets one section listing its servers once each.
    #[test]
    fn property_group_sections_list_unique_members(servers in servers(), profile in profile()) {
        let mut expected: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for server in &servers {
            for tag in server.groups() {
                let members = expected.entry(tag.clone()).or_default();
                if !members.iter().any(|m| m == server.name()) {
                    members.push(server.name().to_string());
                }
            }
        }

        let deployment = Deployment::new(profile, "prop", servers, Mapping::new()).unwrap();
        let (_, sections) = parse(&InventoryRenderer::render(&deployment));

        prop_assert_eq!(sections, expected);
    }

    /// PROPERTY: WinRM attributes appear only for windows servers of a core deployment.
    #[test]
    fn property_winrm_only_for_core_windows(servers in servers(), profile in profile()) {
        let deployment = Deployment::new(profile, "prop", servers, Mapping::new()).unwrap();

        for (server, line) in deployment
            .servers()
            .iter()
            .zip(InventoryRenderer::host_lines(&deployment))
        {
            let winrm = line.get("ansible_connection") == Some("winrm");
            prop_assert_eq!(winrm, profile == Profile::Core && server.is_windows());
            prop_assert_eq!(line.get("ansible_ssh_host"), Some(server.address()));
        }
    }
}
