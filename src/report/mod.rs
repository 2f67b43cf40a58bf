//! Report assembly
//!
//! Each report kind walks a slice of the enterprise graph into a typed tree
//! (see [`models`]), which the output layer flattens into CSV rows.

mod aggregate;
mod commands;
pub mod models;
mod pipelines;

pub use aggregate::fan_out;
pub use commands::{run_all_reports, run_report, ReportOptions, ReportOutcome};
pub use pipelines::Aggregator;

/// The report kinds the tool can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    EnterpriseMembership,
    OrgMembership,
    Teams,
    Repositories,
    Collaborators,
    Packages,
}

impl ReportKind {
    /// The enterprise-scoped reports, in the order `all-reports` runs them
    pub const ENTERPRISE: [ReportKind; 4] = [
        ReportKind::EnterpriseMembership,
        ReportKind::OrgMembership,
        ReportKind::Teams,
        ReportKind::Repositories,
    ];

    /// Output file name
    pub fn file_name(&self) -> &'static str {
        match self {
            ReportKind::EnterpriseMembership => "enterprise-membership-report.csv",
            ReportKind::OrgMembership => "enterprise-orgs-member-report.csv",
            ReportKind::Teams => "teams.csv",
            ReportKind::Repositories => "repos.csv",
            ReportKind::Collaborators => "collaborators.csv",
            ReportKind::Packages => "packages.csv",
        }
    }

    /// Short human-readable name used in logs and the summary table
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::EnterpriseMembership => "enterprise membership",
            ReportKind::OrgMembership => "organization membership",
            ReportKind::Teams => "teams",
            ReportKind::Repositories => "repositories",
            ReportKind::Collaborators => "collaborators",
            ReportKind::Packages => "packages",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(
            ReportKind::EnterpriseMembership.file_name(),
            "enterprise-membership-report.csv"
        );
        assert_eq!(
            ReportKind::OrgMembership.file_name(),
            "enterprise-orgs-member-report.csv"
        );
        assert_eq!(ReportKind::Teams.file_name(), "teams.csv");
        assert_eq!(ReportKind::Repositories.file_name(), "repos.csv");
        assert_eq!(ReportKind::Collaborators.file_name(), "collaborators.csv");
        assert_eq!(ReportKind::Packages.file_name(), "packages.csv");
    }

    #[test]
    fn test_enterprise_reports_exclude_org_scoped() {
        assert!(!ReportKind::ENTERPRISE.contains(&ReportKind::Collaborators));
        assert!(!ReportKind::ENTERPRISE.contains(&ReportKind::Packages));
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(ReportKind::Teams.to_string(), "teams");
    }
}
