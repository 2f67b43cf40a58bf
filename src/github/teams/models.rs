//! Team data models

use serde::Deserialize;

use crate::github::Member;

/// Team node from the GraphQL API
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Filled by the team-member fetch; empty until then
    #[serde(skip)]
    pub members: Vec<Member>,
}

impl Team {
    /// Description, empty when unset
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Permission edge between a team and one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamPermission {
    /// Team slug
    pub team: String,
    /// Permission as returned upstream (READ, TRIAGE, WRITE, MAINTAIN, ADMIN)
    pub permission: String,
}
