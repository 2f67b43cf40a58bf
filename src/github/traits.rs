//! Common traits and connection shapes for GraphQL paged queries

use serde::Deserialize;

use crate::error::Result;
use crate::github::QuotaSnapshot;

/// Cursor state of a connection
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

/// One page of items taken out of a connection
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Convert every item, keeping the cursor state
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_info: self.page_info,
        }
    }
}

/// Connection selected as `{ pageInfo { ... } nodes { ... } }`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NodeConnection<N> {
    pub page_info: PageInfo,
    #[serde(default = "Vec::new")]
    pub nodes: Vec<N>,
}

impl<N> NodeConnection<N> {
    pub fn into_page(self) -> Page<N> {
        Page {
            items: self.nodes,
            page_info: self.page_info,
        }
    }
}

/// Connection selected as `{ pageInfo { ... } edges { ... } }`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EdgeConnection<E> {
    pub page_info: PageInfo,
    #[serde(default = "Vec::new")]
    pub edges: Vec<E>,
}

impl<E> EdgeConnection<E> {
    pub fn into_page(self) -> Page<E> {
        Page {
            items: self.edges,
            page_info: self.page_info,
        }
    }
}

/// Trait for GraphQL `data` payloads that carry one paged connection
///
/// Implement this for a query's data struct to use it with
/// `GitHubClient::fetch_all_pages()`.
pub trait PaginatedResponse<T> {
    /// Take the walked connection out of the payload.
    ///
    /// Returns `None` when the scoping parent (enterprise, organization, team,
    /// repository) resolved to `null`.
    fn into_page(self) -> Option<Page<T>>;

    /// Quota block, if the query selected one
    fn rate_limit(&self) -> Option<&QuotaSnapshot>;

    /// Fail when the parent resolved but the token may not read the walked
    /// connection, which would otherwise look like a missing parent.
    fn ensure_visible(&self, _scope_name: &str) -> Result<()> {
        Ok(())
    }
}
