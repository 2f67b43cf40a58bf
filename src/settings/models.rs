//! Settings file data models

use serde::{Deserialize, Serialize};

/// Contents of `config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// API token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// GraphQL endpoint URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
