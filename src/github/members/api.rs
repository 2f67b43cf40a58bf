//! Member API operations

use log::info;
use serde::Deserialize;
use std::time::Instant;

use crate::error::Result;
use crate::github::traits::{EdgeConnection, NodeConnection, Page, PaginatedResponse};
use crate::github::{GitHubClient, PagedQuery, QuotaSnapshot};

use super::models::{Member, MemberRole};

const ENTERPRISE_MEMBERS_QUERY: &str = r#"
query($enterpriseSlug: String!, $first: Int!, $cursor: String) {
  enterprise(slug: $enterpriseSlug) {
    members(first: $first, after: $cursor) {
      pageInfo { endCursor hasNextPage }
      nodes {
        ... on EnterpriseUserAccount { id login name }
        ... on User { id login name }
      }
    }
  }
  rateLimit { cost limit nodeCount remaining resetAt used }
}
"#;

const ORG_MEMBERS_QUERY: &str = r#"
query($orgLogin: String!, $first: Int!, $cursor: String) {
  organization(login: $orgLogin) {
    membersWithRole(first: $first, after: $cursor) {
      pageInfo { endCursor hasNextPage }
      edges { role node { id login name } }
    }
  }
  rateLimit { cost limit nodeCount remaining resetAt used }
}
"#;

const TEAM_MEMBERS_QUERY: &str = r#"
query($orgLogin: String!, $teamSlug: String!, $first: Int!, $cursor: String) {
  organization(login: $orgLogin) {
    team(slug: $teamSlug) {
      members(first: $first, after: $cursor) {
        pageInfo { endCursor hasNextPage }
        nodes { id login name }
      }
    }
  }
  rateLimit { cost limit nodeCount remaining resetAt used }
}
"#;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct EnterpriseMembersData {
    enterprise: Option<EnterpriseMembers>,
    rate_limit: Option<QuotaSnapshot>,
}

#[derive(Deserialize, Debug)]
struct EnterpriseMembers {
    members: NodeConnection<Member>,
}

impl PaginatedResponse<Member> for EnterpriseMembersData {
    fn into_page(self) -> Option<Page<Member>> {
        self.enterprise.map(|e| e.members.into_page())
    }

    fn rate_limit(&self) -> Option<&QuotaSnapshot> {
        self.rate_limit.as_ref()
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct OrgMembersData {
    organization: Option<OrgMembers>,
    rate_limit: Option<QuotaSnapshot>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct OrgMembers {
    members_with_role: EdgeConnection<MemberEdge>,
}

#[derive(Deserialize, Debug)]
struct MemberEdge {
    role: MemberRole,
    node: Member,
}

impl PaginatedResponse<Member> for OrgMembersData {
    fn into_page(self) -> Option<Page<Member>> {
        self.organization.map(|o| {
            o.members_with_role.into_page().map(|edge| Member {
                role: Some(edge.role),
                ..edge.node
            })
        })
    }

    fn rate_limit(&self) -> Option<&QuotaSnapshot> {
        self.rate_limit.as_ref()
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TeamMembersData {
    organization: Option<TeamLookup>,
    rate_limit: Option<QuotaSnapshot>,
}

#[derive(Deserialize, Debug)]
struct TeamLookup {
    team: Option<TeamMembers>,
}

#[derive(Deserialize, Debug)]
struct TeamMembers {
    members: NodeConnection<Member>,
}

impl PaginatedResponse<Member> for TeamMembersData {
    fn into_page(self) -> Option<Page<Member>> {
        self.organization
            .and_then(|o| o.team)
            .map(|t| t.members.into_page())
    }

    fn rate_limit(&self) -> Option<&QuotaSnapshot> {
        self.rate_limit.as_ref()
    }
}

impl GitHubClient {
    /// Get all members of an enterprise (with pagination)
    pub async fn get_enterprise_members(&self, enterprise_slug: &str) -> Result<Vec<Member>> {
        let query = PagedQuery::new(
            ENTERPRISE_MEMBERS_QUERY,
            format!("members of enterprise '{}'", enterprise_slug),
        )
        .var("enterpriseSlug", enterprise_slug)
        .scope("enterprise", enterprise_slug);

        let start = Instant::now();
        info!("Fetching all members for the {} enterprise", enterprise_slug);
        let members = self
            .fetch_all_pages::<Member, EnterpriseMembersData>(&query)
            .await?;
        info!(
            "Found {} members in the {} enterprise in {:?}",
            members.len(),
            enterprise_slug,
            start.elapsed()
        );

        Ok(members)
    }

    /// Get all members of an organization together with their role
    pub async fn get_org_members(&self, org: &str) -> Result<Vec<Member>> {
        let query = PagedQuery::new(
            ORG_MEMBERS_QUERY,
            format!("members of organization '{}'", org),
        )
        .var("orgLogin", org)
        .scope("organization", org);

        let start = Instant::now();
        info!("Fetching members for {}", org);
        let members = self
            .fetch_all_pages::<Member, OrgMembersData>(&query)
            .await?;
        info!(
            "Found {} members in {} in {:?}",
            members.len(),
            org,
            start.elapsed()
        );

        Ok(members)
    }

    /// Get all members of a team, looked up by slug
    ///
    /// Fails with a "team not found" error when the organization has no team
    /// with that slug.
    pub async fn get_team_members(&self, org: &str, team_slug: &str) -> Result<Vec<Member>> {
        let query = PagedQuery::new(
            TEAM_MEMBERS_QUERY,
            format!("members of team '{}/{}'", org, team_slug),
        )
        .var("orgLogin", org)
        .var("teamSlug", team_slug)
        .scope("team", format!("{}/{}", org, team_slug));

        let start = Instant::now();
        info!("Fetching all members for {}/{}", org, team_slug);
        let members = self
            .fetch_all_pages::<Member, TeamMembersData>(&query)
            .await?;
        info!(
            "Found {} members in the {}/{} team in {:?}",
            members.len(),
            org,
            team_slug,
            start.elapsed()
        );

        Ok(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OctoError;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_enterprise_members_mixed_account_types() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_string_contains("... on EnterpriseUserAccount"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "enterprise": {
                        "members": {
                            "pageInfo": { "endCursor": "x", "hasNextPage": false },
                            "nodes": [
                                { "id": "EUA_1", "login": "alice", "name": "Alice" },
                                { "id": "U_2", "login": "bob", "name": null }
                            ]
                        }
                    },
                    "rateLimit": {
                        "cost": 1, "limit": 5000, "nodeCount": 100,
                        "remaining": 4990, "resetAt": "2030-01-01T00:00:00Z", "used": 10
                    }
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::test_client(&mock_server.uri());
        let members = client.get_enterprise_members("big-corp").await.unwrap();

        assert_eq!(members.len(), 2);
        assert_eq!(members[0].login, "alice");
        assert_eq!(members[0].name(), "Alice");
        assert_eq!(members[1].id, "U_2");
        assert_eq!(members[1].name(), "");
    }

    #[tokio::test]
    async fn test_get_org_members_carries_role() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_string_contains("membersWithRole"))
            .and(body_partial_json(json!({ "variables": { "orgLogin": "acme" } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "organization": {
                        "membersWithRole": {
                            "pageInfo": { "endCursor": "x", "hasNextPage": false },
                            "edges": [
                                { "role": "ADMIN", "node": { "id": "U_1", "login": "alice", "name": "Alice" } },
                                { "role": "MEMBER", "node": { "id": "U_2", "login": "bob", "name": "Bob" } }
                            ]
                        }
                    }
                }
            })))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::test_client(&mock_server.uri());
        let members = client.get_org_members("acme").await.unwrap();

        assert_eq!(members.len(), 2);
        assert!(members[0].is_admin());
        assert_eq!(members[1].role, Some(MemberRole::Member));
    }

    #[tokio::test]
    async fn test_get_team_members_pagination() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(json!({
                "variables": { "orgLogin": "acme", "teamSlug": "platform", "cursor": null }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "organization": {
                        "team": {
                            "members": {
                                "pageInfo": { "endCursor": "m1", "hasNextPage": true },
                                "nodes": [{ "id": "U_1", "login": "alice", "name": null }]
                            }
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
                "variables": { "orgLogin": "acme", "teamSlug": "platform", "cursor": "m1" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "organization": {
                        "team": {
                            "members": {
                                "pageInfo": { "endCursor": "m2", "hasNextPage": false },
                                "nodes": [{ "id": "U_2", "login": "bob", "name": null }]
                            }
                        }
                    }
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::test_client(&mock_server.uri());
        let members = client.get_team_members("acme", "platform").await.unwrap();

        let logins: Vec<&str> = members.iter().map(|m| m.login.as_str()).collect();
        assert_eq!(logins, vec!["alice", "bob"]);
    }

    #[tokio::test]
    async fn test_get_team_members_unknown_slug() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "organization": { "team": null } }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::test_client(&mock_server.uri());
        let err = client.get_team_members("acme", "ghosts").await.unwrap_err();

        match &err {
            OctoError::NotFound { kind, name } => {
                assert_eq!(*kind, "team");
                assert_eq!(name, "acme/ghosts");
            }
            other => panic!("Expected OctoError::NotFound, got {:?}", other),
        }
        assert_eq!(err.to_string(), "team 'acme/ghosts' not found");
    }
}
