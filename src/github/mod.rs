//! GitHub GraphQL client module
//!
//! This module provides the cursor paginator, the shared quota gate and one
//! fetcher per entity kind of the enterprise graph.

mod client;
pub mod members;
pub mod organizations;
pub mod packages;
mod quota;
pub mod repositories;
pub mod teams;
pub mod traits;

pub use client::{GitHubClient, PagedQuery};
pub use members::{Member, MemberRole};
pub use organizations::Organization;
pub use packages::Package;
pub use quota::{backoff_duration, QuotaGovernor, QuotaSnapshot};
pub use repositories::{Collaborator, Repository};
pub use teams::{Team, TeamPermission};
pub use traits::{Page, PageInfo, PaginatedResponse};
