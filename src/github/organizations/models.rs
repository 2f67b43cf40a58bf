//! Organization data models

use serde::Deserialize;

/// Organization node from the GraphQL API
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Organization {
    pub login: String,
    pub id: String,
}
