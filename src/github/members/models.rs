//! Member data models

use serde::Deserialize;

/// Role of a member within an organization
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Admin,
    Member,
    #[serde(other)]
    Unknown,
}

/// A user account (enterprise member, organization member or team member)
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Member {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub login: String,
    pub name: Option<String>,
    /// Organization-level role; `None` outside an organization scope
    #[serde(skip)]
    pub role: Option<MemberRole>,
}

impl Member {
    /// Display name, empty when the user has not set one
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Check if the member administers the organization
    pub fn is_admin(&self) -> bool {
        self.role == Some(MemberRole::Admin)
    }
}
