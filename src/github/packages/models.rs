//! Package data models

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub(super) struct PackageNode {
    pub id: String,
    pub name: String,
    pub repository: Option<PackageRepository>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub(super) struct PackageRepository {
    pub name: String,
}

/// Package owned by an organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub id: String,
    pub name: String,
    /// Name of the linked repository, if any
    pub repository: Option<String>,
}

impl Package {
    pub fn repository(&self) -> &str {
        self.repository.as_deref().unwrap_or("")
    }
}

impl From<PackageNode> for Package {
    fn from(node: PackageNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            repository: node.repository.map(|r| r.name),
        }
    }
}
