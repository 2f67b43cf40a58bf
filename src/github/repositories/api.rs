//! Repository API operations

use log::info;
use serde::Deserialize;
use std::time::Instant;

use crate::error::{OctoError, Result};
use crate::github::traits::{EdgeConnection, NodeConnection, Page, PaginatedResponse};
use crate::github::{GitHubClient, PagedQuery, QuotaSnapshot};

use super::models::{Collaborator, CollaboratorNode, Repository, RepositoryNode};

const ORG_REPOS_QUERY: &str = r#"
query($orgLogin: String!, $first: Int!, $cursor: String) {
  organization(login: $orgLogin) {
    repositories(first: $first, after: $cursor) {
      pageInfo { endCursor hasNextPage }
      nodes {
        id
        name
        visibility
        isArchived
        isFork
        createdAt
        pushedAt
        owner { login }
        repositoryTopics(first: 100) { nodes { topic { name } } }
      }
    }
  }
  rateLimit { cost limit nodeCount remaining resetAt used }
}
"#;

const REPO_COLLABORATORS_QUERY: &str = r#"
query($orgLogin: String!, $repoName: String!, $first: Int!, $cursor: String) {
  organization(login: $orgLogin) {
    repository(name: $repoName) {
      collaborators(affiliation: ALL, first: $first, after: $cursor) {
        pageInfo { endCursor hasNextPage }
        edges { permission node { databaseId login name email } }
      }
    }
  }
  rateLimit { cost limit nodeCount remaining resetAt used }
}
"#;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct OrgReposData {
    organization: Option<OrgRepos>,
    rate_limit: Option<QuotaSnapshot>,
}

#[derive(Deserialize, Debug)]
struct OrgRepos {
    repositories: NodeConnection<RepositoryNode>,
}

impl PaginatedResponse<Repository> for OrgReposData {
    fn into_page(self) -> Option<Page<Repository>> {
        self.organization
            .map(|o| o.repositories.into_page().map(Repository::from))
    }

    fn rate_limit(&self) -> Option<&QuotaSnapshot> {
        self.rate_limit.as_ref()
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CollaboratorsData {
    organization: Option<RepositoryLookup>,
    rate_limit: Option<QuotaSnapshot>,
}

#[derive(Deserialize, Debug)]
struct RepositoryLookup {
    repository: Option<RepositoryCollaborators>,
}

#[derive(Deserialize, Debug)]
struct RepositoryCollaborators {
    // null when the token cannot see the collaborator list
    collaborators: Option<EdgeConnection<CollaboratorEdge>>,
}

#[derive(Deserialize, Debug)]
struct CollaboratorEdge {
    permission: String,
    node: CollaboratorNode,
}

impl PaginatedResponse<Collaborator> for CollaboratorsData {
    fn into_page(self) -> Option<Page<Collaborator>> {
        let conn = self.organization?.repository?.collaborators?;
        Some(conn.into_page().map(|edge| Collaborator {
            database_id: edge.node.database_id,
            login: edge.node.login,
            name: edge.node.name,
            email: edge.node.email,
            permission: edge.permission,
        }))
    }

    fn rate_limit(&self) -> Option<&QuotaSnapshot> {
        self.rate_limit.as_ref()
    }

    fn ensure_visible(&self, scope_name: &str) -> Result<()> {
        match self.organization.as_ref().and_then(|o| o.repository.as_ref()) {
            Some(repo) if repo.collaborators.is_none() => Err(OctoError::Api {
                status: 403,
                message: format!(
                    "collaborators of '{}' not visible to this token (requires push access)",
                    scope_name
                ),
            }),
            _ => Ok(()),
        }
    }
}

impl GitHubClient {
    /// Get all repositories of an organization (with pagination)
    ///
    /// The `teams` field of every returned repository is left empty.
    pub async fn get_org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        let query = PagedQuery::new(
            ORG_REPOS_QUERY,
            format!("repositories for organization '{}'", org),
        )
        .var("orgLogin", org)
        .scope("organization", org);

        let start = Instant::now();
        info!("Fetching all repos for the {} organization", org);
        let repos = self
            .fetch_all_pages::<Repository, OrgReposData>(&query)
            .await?;
        info!(
            "Found {} repos in {} in {:?}",
            repos.len(),
            org,
            start.elapsed()
        );

        Ok(repos)
    }

    /// Get every collaborator of a repository (direct, outside and via teams)
    pub async fn get_repo_collaborators(
        &self,
        org: &str,
        repo_name: &str,
    ) -> Result<Vec<Collaborator>> {
        let query = PagedQuery::new(
            REPO_COLLABORATORS_QUERY,
            format!("collaborators of repository '{}/{}'", org, repo_name),
        )
        .var("orgLogin", org)
        .var("repoName", repo_name)
        .scope("repository", format!("{}/{}", org, repo_name));

        let start = Instant::now();
        info!("Fetching all collaborators for the {}/{} repository", org, repo_name);
        let collaborators = self
            .fetch_all_pages::<Collaborator, CollaboratorsData>(&query)
            .await?;
        info!(
            "Found {} collaborators in {}/{} in {:?}",
            collaborators.len(),
            org,
            repo_name,
            start.elapsed()
        );

        Ok(collaborators)
    }
}
