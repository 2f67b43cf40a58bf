/// Configuration constants for the GitHub GraphQL API
pub mod api {
    /// Public GitHub GraphQL endpoint
    pub const DEFAULT_URL: &str = "https://api.github.com/graphql";

    /// Page size requested for every connection (`first: $first`)
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Edges requested per team when probing for a repository permission
    /// (connection maximum, the `query:` filter also returns substring matches)
    pub const REPO_MATCH_PAGE_SIZE: u32 = 100;

    /// User-Agent sent with every request (required by GitHub)
    pub const USER_AGENT: &str = concat!("octo-reports/", env!("CARGO_PKG_VERSION"));
}

/// Rate limit back-off
pub mod quota {
    /// Requests are suspended until `resetAt` once `remaining` drops below this
    pub const THRESHOLD: i64 = 100;
}

/// Settings file and environment lookup
pub mod settings {
    /// Settings file looked up in the working directory
    pub const LOCAL_FILE: &str = "config.yaml";

    /// Directory under HOME holding the fallback settings file
    pub const DIR_NAME: &str = ".octo-reports";

    /// Fallback settings file name inside `DIR_NAME`
    pub const FILE_NAME: &str = "config.yaml";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["GITHUB_TOKEN", "GH_TOKEN"];

    /// Environment variable for the GraphQL endpoint URL
    pub const URL_ENV_VAR: &str = "GITHUB_GRAPHQL_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default output directory
    pub const OUTPUT_DIR: &str = ".";

    /// Default number of sibling fetches in flight
    pub const CONCURRENCY: u16 = 4;
}
