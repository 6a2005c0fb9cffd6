//! GroupIndex - group tag to member servers

use crate::error::{IrmaError, IrmaResult};

use super::Server;

/// Group tags mapped to the names of the servers carrying them
///
/// Tags keep the order in which they were first seen while walking the
/// servers; members keep declaration order and may repeat when a server
/// lists the same tag twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupIndex {
    groups: Vec<(String, Vec<String>)>,
}

impl GroupIndex {
    pub fn build(servers: &[Server]) -> Self {
        let mut index = Self::default();
        for server in servers {
            for group in server.groups() {
                index.push(group, server.name());
            }
        }
        index
    }

    fn push(&mut self, group: &str, server: &str) {
        match self.groups.iter_mut().find(|(name, _)| name == group) {
            Some((_, members)) => members.push(server.to_string()),
            None => self
                .groups
                .push((group.to_string(), vec![server.to_string()])),
        }
    }

    /// Members of a group, empty if the tag is unknown
    pub fn members(&self, group: &str) -> &[String] {
        self.groups
            .iter()
            .find(|(name, _)| name == group)
            .map(|(_, members)| members.as_slice())
            .unwrap_or(&[])
    }

    /// Members with duplicates collapsed, first occurrence kept
    pub fn unique_members(&self, group: &str) -> Vec<&str> {
        let mut unique: Vec<&str> = Vec::new();
        for member in self.members(group) {
            if !unique.contains(&member.as_str()) {
                unique.push(member.as_str());
            }
        }
        unique
    }

    /// The one server of a singleton group
    ///
    /// Cardinality is counted on raw membership, so a server tagging the
    /// same group twice is reported as ambiguous.
    pub fn singleton(&self, group: &str) -> IrmaResult<&str> {
        match self.members(group) {
            [] => Err(IrmaError::MissingGroup {
                group: group.to_string(),
            }),
            [only] => Ok(only.as_str()),
            members => Err(IrmaError::AmbiguousGroup {
                group: group.to_string(),
                count: members.len(),
            }),
        }
    }

    /// Group tags in first-seen order
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
