//! Server entity - one host of a deployment

/// A host declared in the deployment description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    name: String,
    address: String,
    groups: Vec<String>,
    is_windows: bool,
}

impl Server {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        groups: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            groups: groups.into_iter().map(Into::into).collect(),
            is_windows: false,
        }
    }

    pub fn with_windows(mut self, is_windows: bool) -> Self {
        self.is_windows = is_windows;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hostname or IP address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Group tags, as written (may contain duplicates)
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn is_windows(&self) -> bool {
        self.is_windows
    }

    /// Whether Ansible should run on the control machine itself
    pub fn is_local(&self) -> bool {
        matches!(self.address.as_str(), "localhost" | "127.0.0.1")
    }
}
