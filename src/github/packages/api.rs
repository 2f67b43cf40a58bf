//! Package API operations

use log::info;
use serde::Deserialize;
use std::time::Instant;

use crate::error::Result;
use crate::github::traits::{NodeConnection, Page, PaginatedResponse};
use crate::github::{GitHubClient, PagedQuery, QuotaSnapshot};

use super::models::{Package, PackageNode};

const ORG_PACKAGES_QUERY: &str = r#"
query($orgLogin: String!, $first: Int!, $cursor: String) {
  organization(login: $orgLogin) {
    packages(first: $first, after: $cursor) {
      pageInfo { endCursor hasNextPage }
      nodes { id name repository { name } }
    }
  }
  rateLimit { cost limit nodeCount remaining resetAt used }
}
"#;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct OrgPackagesData {
    organization: Option<OrgPackages>,
    rate_limit: Option<QuotaSnapshot>,
}

#[derive(Deserialize, Debug)]
struct OrgPackages {
    packages: NodeConnection<PackageNode>,
}

impl PaginatedResponse<Package> for OrgPackagesData {
    fn into_page(self) -> Option<Page<Package>> {
        self.organization
            .map(|o| o.packages.into_page().map(Package::from))
    }

    fn rate_limit(&self) -> Option<&QuotaSnapshot> {
        self.rate_limit.as_ref()
    }
}

impl GitHubClient {
    /// Get all packages of an organization (with pagination)
    pub async fn get_org_packages(&self, org: &str) -> Result<Vec<Package>> {
        let query = PagedQuery::new(
            ORG_PACKAGES_QUERY,
            format!("packages for organization '{}'", org),
        )
        .var("orgLogin", org)
        .scope("organization", org);

        let start = Instant::now();
        info!("Fetching packages for the {} organization", org);
        let packages = self
            .fetch_all_pages::<Package, OrgPackagesData>(&query)
            .await?;
        info!("Fetched {} packages in {:?}", packages.len(), start.elapsed());

        Ok(packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_org_packages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(json!({ "variables": { "orgLogin": "acme", "first": 100 } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "organization": {
                        "packages": {
                            "pageInfo": { "endCursor": "p1", "hasNextPage": false },
                            "nodes": [
                                { "id": "P_1", "name": "api-client", "repository": { "name": "api" } },
                                { "id": "P_2", "name": "orphan", "repository": null }
                            ]
                        }
                    },
                    "rateLimit": {
                        "cost": 1, "limit": 5000, "nodeCount": 100,
                        "remaining": 4999, "resetAt": "2030-01-01T00:00:00Z", "used": 1
                    }
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::test_client(&mock_server.uri());
        let packages = client.get_org_packages("acme").await.unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].repository(), "api");
        assert!(packages[1].repository.is_none());
    }
}
