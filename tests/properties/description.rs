//! Property tests for deployment description parsing.

use proptest::prelude::*;

use irma_ansible::{parse_deployment, Profile};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_deployment` never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(content in "(?s).{0,256}") {
        let _ = parse_deployment(&content, "prop", Profile::Core);
        let _ = parse_deployment(&content, "prop", Profile::Kiosk);
    }

    /// PROPERTY: distinct names always parse, one server per entry.
    #[test]
    fn property_listed_servers_are_kept(count in 0usize..=6) {
        let mut content = String::from("servers:\n");
        for i in 0..count {
            content.push_str(&format!(
                "  - name: host{}\n    ip: 192.168.0.{}\n    ansible_groups: [g{}]\n",
                i, i, i % 2
            ));
        }
        if count == 0 {
            content = String::from("servers: []\n");
        }

        let deployment = parse_deployment(&content, "prop", Profile::Core).unwrap();
        prop_assert_eq!(deployment.servers().len(), count);
    }
}
