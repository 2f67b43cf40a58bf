//! Per-report aggregation pipelines
//!
//! Every pipeline returns a fully assembled tree or the first error it hit.
//! When a pipeline has an inner fan-out the organizations are walked one by
//! one and only the inner level runs concurrently, so at most `concurrency`
//! requests are ever in flight.

use log::info;

use crate::error::{OctoError, Result};
use crate::github::{GitHubClient, Member};

use super::aggregate::fan_out;
use super::models::{OrgMembership, OrgPackages, OrgRepositories, OrgTeams, RepositoryCollaborators};

/// Composes entity fetchers into report trees
pub struct Aggregator<'a> {
    client: &'a GitHubClient,
    concurrency: usize,
}

impl<'a> Aggregator<'a> {
    pub fn new(client: &'a GitHubClient, concurrency: usize) -> Self {
        Self {
            client,
            concurrency: concurrency.max(1),
        }
    }

    /// Enterprise → Members
    pub async fn enterprise_members(&self, enterprise_slug: &str) -> Result<Vec<Member>> {
        self.client.get_enterprise_members(enterprise_slug).await
    }

    /// Enterprise → Organizations → Members-With-Role
    pub async fn org_memberships(&self, enterprise_slug: &str) -> Result<Vec<OrgMembership>> {
        let client = self.client;
        let orgs = client.get_enterprise_orgs(enterprise_slug).await?;

        fan_out(orgs, self.concurrency, move |org| async move {
            let members = client.get_org_members(&org.login).await?;
            Ok::<_, OctoError>(OrgMembership { org, members })
        })
        .await
    }

    /// Enterprise → Organizations → Teams → Members
    pub async fn org_teams(&self, enterprise_slug: &str) -> Result<Vec<OrgTeams>> {
        let client = self.client;
        let orgs = client.get_enterprise_orgs(enterprise_slug).await?;

        let mut result = Vec::with_capacity(orgs.len());
        for org in orgs {
            let teams = client.get_org_teams(&org.login).await?;
            let login = org.login.as_str();
            let teams = fan_out(teams, self.concurrency, move |mut team| async move {
                team.members = client.get_team_members(login, &team.slug).await?;
                Ok::<_, OctoError>(team)
            })
            .await?;

            info!("Collected members of {} teams in {}", teams.len(), org.login);
            result.push(OrgTeams { org, teams });
        }

        Ok(result)
    }

    /// Enterprise → Organizations → Repositories → Team permissions
    pub async fn org_repositories(&self, enterprise_slug: &str) -> Result<Vec<OrgRepositories>> {
        let client = self.client;
        let orgs = client.get_enterprise_orgs(enterprise_slug).await?;

        let mut result = Vec::with_capacity(orgs.len());
        for org in orgs {
            let repositories = client.get_org_repos(&org.login).await?;
            let login = org.login.as_str();
            let repositories = fan_out(repositories, self.concurrency, move |mut repo| async move {
                repo.teams = client.get_repo_team_permissions(login, &repo.name).await?;
                Ok::<_, OctoError>(repo)
            })
            .await?;

            result.push(OrgRepositories { org, repositories });
        }

        Ok(result)
    }

    /// Organization → Repositories → Collaborators
    pub async fn repository_collaborators(
        &self,
        org: &str,
    ) -> Result<Vec<RepositoryCollaborators>> {
        let client = self.client;
        let repositories = client.get_org_repos(org).await?;

        fan_out(repositories, self.concurrency, move |repository| async move {
            let collaborators = client.get_repo_collaborators(org, &repository.name).await?;
            Ok::<_, OctoError>(RepositoryCollaborators {
                org_login: org.to_string(),
                repository,
                collaborators,
            })
        })
        .await
    }

    /// Organization → Packages
    pub async fn org_packages(&self, org: &str) -> Result<OrgPackages> {
        let packages = self.client.get_org_packages(org).await?;
        Ok(OrgPackages {
            org_login: org.to_string(),
            packages,
        })
    }
}
