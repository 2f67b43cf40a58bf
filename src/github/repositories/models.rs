//! Repository data models

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::github::TeamPermission;

/// Repository node as selected by the repositories query
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(super) struct RepositoryNode {
    pub id: String,
    pub name: String,
    pub visibility: String,
    pub is_archived: bool,
    pub is_fork: bool,
    pub created_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub owner: OwnerNode,
    #[serde(default)]
    pub repository_topics: Option<TopicNodes>,
}

#[derive(Deserialize, Debug)]
pub(super) struct OwnerNode {
    pub login: String,
}

#[derive(Deserialize, Debug)]
pub(super) struct TopicNodes {
    #[serde(default)]
    pub nodes: Vec<TopicNode>,
}

#[derive(Deserialize, Debug)]
pub(super) struct TopicNode {
    pub topic: TopicName,
}

#[derive(Deserialize, Debug)]
pub(super) struct TopicName {
    pub name: String,
}

/// Repository of an organization
#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    pub id: String,
    pub name: String,
    /// PUBLIC, PRIVATE or INTERNAL
    pub visibility: String,
    pub is_archived: bool,
    pub is_fork: bool,
    pub created_at: DateTime<Utc>,
    /// `None` for a repository that was never pushed to
    pub pushed_at: Option<DateTime<Utc>>,
    pub owner: String,
    /// Topic names in upstream order
    pub topics: Vec<String>,
    /// Filled by the team-permission fan-out; empty until then
    pub teams: Vec<TeamPermission>,
}

impl From<RepositoryNode> for Repository {
    fn from(node: RepositoryNode) -> Self {
        let topics = node
            .repository_topics
            .map(|t| t.nodes.into_iter().map(|n| n.topic.name).collect())
            .unwrap_or_default();

        Self {
            id: node.id,
            name: node.name,
            visibility: node.visibility,
            is_archived: node.is_archived,
            is_fork: node.is_fork,
            created_at: node.created_at,
            pushed_at: node.pushed_at,
            owner: node.owner.login,
            topics,
            teams: Vec::new(),
        }
    }
}

/// Collaborator edge node
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(super) struct CollaboratorNode {
    pub database_id: Option<u64>,
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// User with access to a repository, with their effective permission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collaborator {
    pub database_id: Option<u64>,
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
    /// READ, TRIAGE, WRITE, MAINTAIN or ADMIN
    pub permission: String,
}

impl Collaborator {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_repository_from_node() {
        let json = r#"{
            "id": "R_kgDOABC",
            "name": "infra",
            "visibility": "PRIVATE",
            "isArchived": true,
            "isFork": false,
            "createdAt": "2021-03-04T05:06:07Z",
            "pushedAt": "2023-01-02T03:04:05Z",
            "owner": { "login": "acme" },
            "repositoryTopics": {
                "nodes": [
                    { "topic": { "name": "infra" } },
                    { "topic": { "name": "terraform" } }
                ]
            }
        }"#;

        let node: RepositoryNode = serde_json::from_str(json).unwrap();
        let repo = Repository::from(node);

        assert_eq!(repo.owner, "acme");
        assert!(repo.is_archived);
        assert_eq!(repo.topics, vec!["infra", "terraform"]);
        assert_eq!(
            repo.created_at,
            Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap()
        );
        assert!(repo.teams.is_empty());
    }

    #[test]
    fn test_repository_never_pushed() {
        let json = r#"{
            "id": "R_2",
            "name": "empty",
            "visibility": "PUBLIC",
            "isArchived": false,
            "isFork": true,
            "createdAt": "2024-06-01T00:00:00Z",
            "pushedAt": null,
            "owner": { "login": "acme" },
            "repositoryTopics": { "nodes": [] }
        }"#;

        let repo = Repository::from(serde_json::from_str::<RepositoryNode>(json).unwrap());
        assert!(repo.pushed_at.is_none());
        assert!(repo.topics.is_empty());
        assert!(repo.is_fork);
    }

    #[test]
    fn test_collaborator_optional_fields() {
        let collaborator = Collaborator {
            database_id: Some(583231),
            login: "octocat".to_string(),
            name: None,
            email: Some("octocat@github.com".to_string()),
            permission: "ADMIN".to_string(),
        };
        assert_eq!(collaborator.name(), "");
        assert_eq!(collaborator.email(), "octocat@github.com");
    }
}
