//! GitHub GraphQL HTTP client and cursor paginator

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use std::time::Duration;

use crate::config::api;
use crate::error::{OctoError, Result};
use crate::github::traits::PaginatedResponse;
use crate::github::QuotaGovernor;

/// GraphQL response envelope
#[derive(Deserialize, Debug)]
struct GraphQlResponse<D> {
    data: Option<D>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

/// Single entry of the `errors` array
#[derive(Deserialize, Debug)]
struct GraphQlError {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

/// Descriptor of one paged query: document, scope variables and error context
///
/// `$first` and `$cursor` are filled in by the paginator and must not be part
/// of `variables`.
#[derive(Debug, Clone)]
pub struct PagedQuery<'a> {
    pub document: &'a str,
    pub variables: Map<String, Value>,
    /// Human-readable label for errors and logs (e.g. "teams for organization 'acme'")
    pub context: String,
    /// Entity kind reported when the scoping parent resolves to `null`
    pub scope_kind: &'static str,
    /// Scope key reported when the scoping parent resolves to `null`
    pub scope_name: String,
}

impl<'a> PagedQuery<'a> {
    pub fn new(document: &'a str, context: String) -> Self {
        Self {
            document,
            variables: Map::new(),
            context,
            scope_kind: "resource",
            scope_name: String::new(),
        }
    }

    /// Add a scope variable
    pub fn var(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.variables.insert(name.to_string(), value.into());
        self
    }

    /// Set the lookup reported as not found when the scoping parent is `null`
    pub fn scope(mut self, kind: &'static str, name: impl Into<String>) -> Self {
        self.scope_kind = kind;
        self.scope_name = name.into();
        self
    }
}

/// GitHub GraphQL API client
pub struct GitHubClient {
    client: Client,
    token: String,
    url: String,
    page_size: u32,
    governor: Arc<QuotaGovernor>,
}

impl GitHubClient {
    /// Create a new client for the given GraphQL endpoint
    pub fn new(token: String, url: String) -> Self {
        let client = Client::builder()
            .user_agent(api::USER_AGENT)
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            url,
            page_size: api::DEFAULT_PAGE_SIZE,
            governor: Arc::new(QuotaGovernor::default()),
        }
    }

    /// GraphQL endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    fn post(&self) -> reqwest::RequestBuilder {
        self.client
            .post(&self.url)
            .header("Authorization", format!("bearer {}", self.token))
            .header("Content-Type", "application/json")
    }

    /// Issue one GraphQL request, waiting on the quota gate first
    ///
    /// Errors whose type is `NOT_FOUND` are tolerated so the caller can turn a
    /// `null` parent into an explicit not-found result; any other GraphQL
    /// error fails the request.
    pub async fn query<D>(&self, document: &str, variables: &Value, context: &str) -> Result<D>
    where
        D: DeserializeOwned,
    {
        self.governor.wait_ready().await;

        debug!("Querying {} with variables {}", context, variables);

        let response = self
            .post()
            .json(&json!({ "query": document, "variables": variables }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(OctoError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", context),
            });
        }

        let raw: Value = response.json().await?;
        let body: GraphQlResponse<D> = serde_json::from_value(raw)
            .map_err(|e| OctoError::Json(format!("Failed to parse {}: {}", context, e)))?;

        let fatal: Vec<String> = body
            .errors
            .unwrap_or_default()
            .iter()
            .filter(|e| e.error_type.as_deref() != Some("NOT_FOUND"))
            .map(|e| e.message.clone())
            .collect();
        if !fatal.is_empty() {
            return Err(OctoError::GraphQl {
                context: context.to_string(),
                messages: fatal,
            });
        }

        body.data
            .ok_or_else(|| OctoError::Json(format!("Response for {} carried no data", context)))
    }

    /// Walk a cursor-paginated connection to exhaustion
    ///
    /// Pages are requested one after another, each with the previous page's
    /// `endCursor`, until a page reports `hasNextPage: false`. Items are
    /// returned in upstream order. Any error aborts the walk and discards the
    /// pages collected so far.
    pub async fn fetch_all_pages<T, R>(&self, query: &PagedQuery<'_>) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let mut all_items: Vec<T> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut page_num: u32 = 1;

        loop {
            let mut variables = query.variables.clone();
            variables.insert("first".to_string(), json!(self.page_size));
            variables.insert(
                "cursor".to_string(),
                cursor.clone().map(Value::String).unwrap_or(Value::Null),
            );

            let page_context = format!("{} (page {})", query.context, page_num);
            let response: R = self
                .query(query.document, &Value::Object(variables), &page_context)
                .await?;

            if let Some(snapshot) = response.rate_limit() {
                self.governor.observe(snapshot);
            }

            response.ensure_visible(&query.scope_name)?;
            let page = response.into_page().ok_or_else(|| OctoError::NotFound {
                kind: query.scope_kind,
                name: query.scope_name.clone(),
            })?;

            debug!("Page {} returned {} items", page_num, page.items.len());
            all_items.extend(page.items);

            if !page.page_info.has_next_page {
                break;
            }

            let next = page.page_info.end_cursor.ok_or_else(|| {
                OctoError::Json(format!(
                    "{} reported a next page without an end cursor",
                    page_context
                ))
            })?;
            if cursor.as_deref() == Some(next.as_str()) {
                return Err(OctoError::Json(format!(
                    "{} returned the same cursor twice",
                    page_context
                )));
            }

            cursor = Some(next);
            page_num += 1;
        }

        debug!(
            "Fetched {} total items for {} in {} page(s)",
            all_items.len(),
            query.context,
            page_num
        );
        Ok(all_items)
    }
}

#[cfg(test)]
impl GitHubClient {
    /// Create a test client pointed at a mock server's `/graphql` path
    pub fn test_client(base_url: &str) -> Self {
        Self::new(
            "test-token".to_string(),
            format!("{}/graphql", base_url.trim_end_matches('/')),
        )
    }

    /// Shared quota gate
    pub fn governor(&self) -> &QuotaGovernor {
        &self.governor
    }
}
