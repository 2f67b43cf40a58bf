//! Organization API operations

use log::info;
use serde::Deserialize;
use std::time::Instant;

use crate::error::Result;
use crate::github::traits::{NodeConnection, Page, PaginatedResponse};
use crate::github::{GitHubClient, PagedQuery, QuotaSnapshot};

use super::models::Organization;

const ENTERPRISE_ORGS_QUERY: &str = r#"
query($enterpriseSlug: String!, $first: Int!, $cursor: String) {
  enterprise(slug: $enterpriseSlug) {
    organizations(first: $first, after: $cursor) {
      pageInfo { endCursor hasNextPage }
      nodes { login id }
    }
  }
  rateLimit { cost limit nodeCount remaining resetAt used }
}
"#;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct EnterpriseOrgsData {
    enterprise: Option<EnterpriseOrgs>,
    rate_limit: Option<QuotaSnapshot>,
}

#[derive(Deserialize, Debug)]
struct EnterpriseOrgs {
    organizations: NodeConnection<Organization>,
}

impl PaginatedResponse<Organization> for EnterpriseOrgsData {
    fn into_page(self) -> Option<Page<Organization>> {
        self.enterprise.map(|e| e.organizations.into_page())
    }

    fn rate_limit(&self) -> Option<&QuotaSnapshot> {
        self.rate_limit.as_ref()
    }
}

impl GitHubClient {
    /// Get all organizations of an enterprise (with pagination)
    pub async fn get_enterprise_orgs(&self, enterprise_slug: &str) -> Result<Vec<Organization>> {
        let query = PagedQuery::new(
            ENTERPRISE_ORGS_QUERY,
            format!("organizations for enterprise '{}'", enterprise_slug),
        )
        .var("enterpriseSlug", enterprise_slug)
        .scope("enterprise", enterprise_slug);

        let start = Instant::now();
        info!("Fetching all orgs for {}", enterprise_slug);
        let orgs = self
            .fetch_all_pages::<Organization, EnterpriseOrgsData>(&query)
            .await?;
        info!(
            "Found {} orgs in the {} enterprise in {:?}",
            orgs.len(),
            enterprise_slug,
            start.elapsed()
        );

        Ok(orgs)
    }
}
