//! octo-reports - CSV reports of GitHub enterprise and organization data
//!
//! Walks the enterprise graph through the GitHub GraphQL API and writes one
//! flat CSV file per report kind.
//!
//! # Features
//!
//! - Enterprise members, organization admins and members
//! - Teams with their members, repositories with team permissions
//! - Repository collaborators and organization packages
//! - Automatic cursor pagination and rate limit back-off
//! - Bounded concurrent fan-out with stable output order
//!
//! # Example
//!
//! ```bash
//! # Members of every organization in an enterprise
//! octo-reports org-report --enterprise-slug my-enterprise
//!
//! # Collaborators of every repository in one organization
//! octo-reports collaborator-report --org my-org --output-dir reports
//!
//! # Every enterprise report against GitHub Enterprise Server
//! octo-reports all-reports --enterprise-slug my-enterprise \
//!     --url https://ghe.example.com/api/graphql
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod output;
pub mod report;
pub mod settings;
pub mod ui;

pub use cli::{Cli, Command, EnterpriseArgs, OrgArgs};
pub use error::{OctoError, Result};
pub use github::{
    Collaborator, GitHubClient, Member, MemberRole, Organization, Package, QuotaGovernor,
    QuotaSnapshot, Repository, Team, TeamPermission,
};
pub use output::{print_summary, ReportRow};
pub use report::{run_all_reports, run_report, Aggregator, ReportKind, ReportOptions, ReportOutcome};
pub use settings::{resolve_token, resolve_url, Settings, SettingsStore};
