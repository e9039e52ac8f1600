//! Enabled backend services, as reported by the discovery endpoint.

use serde::{Deserialize, Serialize};

/// Ordered list of enabled service identifiers.
///
/// Kept exactly as the server returned it: no dedup, no sorting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ServiceList(pub Vec<String>);

impl ServiceList {
    pub const fn new(services: Vec<String>) -> Self {
        Self(services)
    }

    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for ServiceList {
    fn from(services: Vec<String>) -> Self {
        Self(services)
    }
}

/// Raw `/apis` response. A missing `services` field means no services.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceDirectory {
    #[serde(default)]
    pub services: Option<Vec<String>>,
}

impl From<ServiceDirectory> for ServiceList {
    fn from(dir: ServiceDirectory) -> Self {
        Self(dir.services.unwrap_or_default())
    }
}
