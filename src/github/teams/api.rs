//! Team API operations

use log::{info, warn};
use serde::Deserialize;
use std::time::Instant;

use crate::config::api;
use crate::error::Result;
use crate::github::traits::{NodeConnection, Page, PaginatedResponse};
use crate::github::{GitHubClient, PagedQuery, QuotaSnapshot};

use super::models::{Team, TeamPermission};

const ORG_TEAMS_QUERY: &str = r#"
query($orgLogin: String!, $first: Int!, $cursor: String) {
  organization(login: $orgLogin) {
    teams(first: $first, after: $cursor) {
      pageInfo { endCursor hasNextPage }
      nodes { id name slug description }
    }
  }
  rateLimit { cost limit nodeCount remaining resetAt used }
}
"#;

const REPO_TEAMS_QUERY: &str = r#"
query($orgLogin: String!, $repoName: String!, $repoMatches: Int!, $first: Int!, $cursor: String) {
  organization(login: $orgLogin) {
    teams(first: $first, after: $cursor) {
      pageInfo { endCursor hasNextPage }
      nodes {
        slug
        repositories(first: $repoMatches, query: $repoName) {
          edges { permission node { name } }
        }
      }
    }
  }
  rateLimit { cost limit nodeCount remaining resetAt used }
}
"#;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct OrgTeamsData {
    organization: Option<OrgTeams>,
    rate_limit: Option<QuotaSnapshot>,
}

#[derive(Deserialize, Debug)]
struct OrgTeams {
    teams: NodeConnection<Team>,
}

impl PaginatedResponse<Team> for OrgTeamsData {
    fn into_page(self) -> Option<Page<Team>> {
        self.organization.map(|o| o.teams.into_page())
    }

    fn rate_limit(&self) -> Option<&QuotaSnapshot> {
        self.rate_limit.as_ref()
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RepoTeamsData {
    organization: Option<RepoTeams>,
    rate_limit: Option<QuotaSnapshot>,
}

#[derive(Deserialize, Debug)]
struct RepoTeams {
    teams: NodeConnection<TeamRepoProbe>,
}

#[derive(Deserialize, Debug)]
struct TeamRepoProbe {
    slug: String,
    repositories: TeamRepoEdges,
}

#[derive(Deserialize, Debug)]
struct TeamRepoEdges {
    #[serde(default)]
    edges: Vec<TeamRepoEdge>,
}

#[derive(Deserialize, Debug)]
struct TeamRepoEdge {
    permission: String,
    node: RepoName,
}

#[derive(Deserialize, Debug)]
struct RepoName {
    name: String,
}

impl TeamRepoProbe {
    /// Permission on exactly `repo_name`; the upstream `query:` filter is a substring search
    ///
    /// A full window of edges without an exact match means the match may have
    /// been cut off, which is logged.
    fn permission_on(self, repo_name: &str) -> Option<TeamPermission> {
        let TeamRepoProbe { slug, repositories } = self;
        let returned = repositories.edges.len();

        let found = repositories
            .edges
            .into_iter()
            .find(|e| e.node.name.eq_ignore_ascii_case(repo_name));

        match found {
            Some(edge) => Some(TeamPermission {
                team: slug,
                permission: edge.permission,
            }),
            None => {
                if returned >= api::REPO_MATCH_PAGE_SIZE as usize {
                    warn!(
                        "Team {} returned {} repositories matching '{}' without an exact match; its permission on {} may be missing",
                        slug, returned, repo_name, repo_name
                    );
                }
                None
            }
        }
    }
}

impl PaginatedResponse<TeamRepoProbe> for RepoTeamsData {
    fn into_page(self) -> Option<Page<TeamRepoProbe>> {
        self.organization.map(|o| o.teams.into_page())
    }

    fn rate_limit(&self) -> Option<&QuotaSnapshot> {
        self.rate_limit.as_ref()
    }
}

impl GitHubClient {
    /// Get all teams of an organization (with pagination)
    pub async fn get_org_teams(&self, org: &str) -> Result<Vec<Team>> {
        let query = PagedQuery::new(ORG_TEAMS_QUERY, format!("teams for organization '{}'", org))
            .var("orgLogin", org)
            .scope("organization", org);

        let start = Instant::now();
        info!("Fetching all teams for {}", org);
        let teams = self.fetch_all_pages::<Team, OrgTeamsData>(&query).await?;
        info!(
            "Found {} teams in the {} organization in {:?}",
            teams.len(),
            org,
            start.elapsed()
        );

        Ok(teams)
    }

    /// Get every team holding a permission on `repo_name`
    ///
    /// Walks all teams of the organization and probes each one for an edge to
    /// the repository, so the cost grows with the number of teams. Teams come
    /// back in the order the organization lists them.
    pub async fn get_repo_team_permissions(
        &self,
        org: &str,
        repo_name: &str,
    ) -> Result<Vec<TeamPermission>> {
        let query = PagedQuery::new(
            REPO_TEAMS_QUERY,
            format!("team permissions on repository '{}/{}'", org, repo_name),
        )
        .var("orgLogin", org)
        .var("repoName", repo_name)
        .var("repoMatches", api::REPO_MATCH_PAGE_SIZE)
        .scope("organization", org);

        let start = Instant::now();
        info!("Fetching all teams for the {}/{} repository", org, repo_name);
        let teams: Vec<TeamPermission> = self
            .fetch_all_pages::<TeamRepoProbe, RepoTeamsData>(&query)
            .await?
            .into_iter()
            .filter_map(|probe| probe.permission_on(repo_name))
            .collect();
        info!(
            "Found {} teams with access to {}/{} in {:?}",
            teams.len(),
            org,
            repo_name,
            start.elapsed()
        );

        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OctoError;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn probe(slug: &str, edges: &[(&str, &str)]) -> Value {
        let edges: Vec<Value> = edges
            .iter()
            .map(|(repo, permission)| json!({ "permission": permission, "node": { "name": repo } }))
            .collect();
        json!({ "slug": slug, "repositories": { "edges": edges } })
    }

    #[tokio::test]
    async fn test_get_org_teams() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_string_contains("nodes { id name slug description }"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "organization": {
                        "teams": {
                            "pageInfo": { "endCursor": "t1", "hasNextPage": false },
                            "nodes": [
                                { "id": "T_1", "name": "Owners", "slug": "owners", "description": null },
                                { "id": "T_2", "name": "Developers", "slug": "developers", "description": "All devs" }
                            ]
                        }
                    }
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::test_client(&mock_server.uri());
        let teams = client.get_org_teams("acme").await.unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].slug, "owners");
        assert_eq!(teams[1].description(), "All devs");
    }

    #[tokio::test]
    async fn test_get_org_teams_unknown_org() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "organization": null },
                "errors": [{ "type": "NOT_FOUND", "message": "Could not resolve to an Organization" }]
            })))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::test_client(&mock_server.uri());
        let err = client.get_org_teams("nope").await.unwrap_err();
        assert!(matches!(err, OctoError::NotFound { kind: "organization", .. }));
    }

    #[tokio::test]
    async fn test_repo_team_permissions_keep_only_teams_with_edges() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(json!({
                "variables": { "orgLogin": "acme", "repoName": "infra", "cursor": null }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "organization": {
                        "teams": {
                            "pageInfo": { "endCursor": "p1", "hasNextPage": true },
                            "nodes": [
                                probe("team-a", &[("infra", "WRITE")]),
                                probe("team-c", &[])
                            ]
                        }
                    }
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(json!({
                "variables": { "orgLogin": "acme", "repoName": "infra", "cursor": "p1" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "organization": {
                        "teams": {
                            "pageInfo": { "endCursor": "p2", "hasNextPage": false },
                            "nodes": [probe("team-b", &[("infra", "ADMIN")])]
                        }
                    }
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::test_client(&mock_server.uri());
        let teams = client
            .get_repo_team_permissions("acme", "infra")
            .await
            .unwrap();

        assert_eq!(
            teams,
            vec![
                TeamPermission {
                    team: "team-a".to_string(),
                    permission: "WRITE".to_string()
                },
                TeamPermission {
                    team: "team-b".to_string(),
                    permission: "ADMIN".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_repo_team_permissions_ignore_substring_matches() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "organization": {
                        "teams": {
                            "pageInfo": { "endCursor": "p1", "hasNextPage": false },
                            "nodes": [
                                probe("tools", &[("infra-tools", "ADMIN")]),
                                probe("core", &[("infra-tools", "READ"), ("Infra", "MAINTAIN")])
                            ]
                        }
                    }
                }
            })))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::test_client(&mock_server.uri());
        let teams = client
            .get_repo_team_permissions("acme", "infra")
            .await
            .unwrap();

        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].team, "core");
        assert_eq!(teams[0].permission, "MAINTAIN");
    }

    #[tokio::test]
    async fn test_repo_team_permissions_request_full_match_window() {
        let mock_server = MockServer::start().await;

        let crowded: Vec<(String, &str)> = (0..api::REPO_MATCH_PAGE_SIZE - 1)
            .map(|i| (format!("api-{}", i), "READ"))
            .chain(std::iter::once(("api".to_string(), "WRITE")))
            .collect();
        let crowded: Vec<(&str, &str)> = crowded.iter().map(|(r, p)| (r.as_str(), *p)).collect();

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(json!({
                "variables": { "repoName": "api", "repoMatches": api::REPO_MATCH_PAGE_SIZE }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "organization": {
                        "teams": {
                            "pageInfo": { "endCursor": "p1", "hasNextPage": false },
                            "nodes": [probe("backend", &crowded)]
                        }
                    }
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::test_client(&mock_server.uri());
        let teams = client
            .get_repo_team_permissions("acme", "api")
            .await
            .unwrap();

        assert_eq!(api::REPO_MATCH_PAGE_SIZE, 100);
        assert_eq!(
            teams,
            vec![TeamPermission {
                team: "backend".to_string(),
                permission: "WRITE".to_string()
            }]
        );
    }

    #[test]
    fn test_full_window_without_exact_match_contributes_nothing() {
        let edges: Vec<Value> = (0..api::REPO_MATCH_PAGE_SIZE)
            .map(|i| json!({ "permission": "READ", "node": { "name": format!("api-{}", i) } }))
            .collect();
        let team: TeamRepoProbe =
            serde_json::from_value(json!({ "slug": "backend", "repositories": { "edges": edges } }))
                .unwrap();

        assert!(team.permission_on("api").is_none());
    }
}
