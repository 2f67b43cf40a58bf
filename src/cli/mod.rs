//! CLI argument parsing

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::defaults;
use crate::report::ReportKind;

/// GitHub enterprise and organization reports
#[derive(Parser, Debug)]
#[command(name = "octo-reports")]
#[command(version)]
#[command(
    about = "Generate CSV reports of GitHub enterprise and organization data",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API token (overrides env vars and settings file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// GraphQL endpoint URL (e.g. https://ghe.example.com/api/graphql)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Settings file (default: ./config.yaml, then ~/.octo-reports/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory the CSV files are written to
    #[arg(long, default_value = defaults::OUTPUT_DIR, global = true)]
    pub output_dir: PathBuf,

    /// Maximum number of sibling fetches in flight
    #[arg(
        long,
        default_value_t = defaults::CONCURRENCY,
        value_parser = clap::value_parser!(u16).range(1..),
        global = true
    )]
    pub concurrency: u16,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Batch mode: no spinners, no summary table
    #[arg(short, long, default_value_t = false, global = true)]
    pub batch: bool,
}

/// Report subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Members of an enterprise (enterprise-membership-report.csv)
    EnterpriseReport(EnterpriseArgs),

    /// Admins and members of every organization in an enterprise (enterprise-orgs-member-report.csv)
    OrgReport(EnterpriseArgs),

    /// Teams and their members across an enterprise (teams.csv)
    TeamReport(EnterpriseArgs),

    /// Repositories and team permissions across an enterprise (repos.csv)
    RepoReport(EnterpriseArgs),

    /// Collaborators of every repository in an organization (collaborators.csv)
    CollaboratorReport(OrgArgs),

    /// Packages of an organization (packages.csv)
    PackageReport(OrgArgs),

    /// Every enterprise report in one run
    AllReports(EnterpriseArgs),
}

/// Enterprise scope
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EnterpriseArgs {
    /// Enterprise slug
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub enterprise_slug: String,
}

/// Organization scope
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct OrgArgs {
    /// Organization login
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub org: String,
}

impl Command {
    /// Scope key: the enterprise slug, or the organization login
    pub fn scope(&self) -> &str {
        match self {
            Command::EnterpriseReport(a)
            | Command::OrgReport(a)
            | Command::TeamReport(a)
            | Command::RepoReport(a)
            | Command::AllReports(a) => a.enterprise_slug.as_str(),
            Command::CollaboratorReport(a) | Command::PackageReport(a) => a.org.as_str(),
        }
    }

    /// Single report to build; `None` for `all-reports`
    pub fn report(&self) -> Option<ReportKind> {
        match self {
            Command::EnterpriseReport(_) => Some(ReportKind::EnterpriseMembership),
            Command::OrgReport(_) => Some(ReportKind::OrgMembership),
            Command::TeamReport(_) => Some(ReportKind::Teams),
            Command::RepoReport(_) => Some(ReportKind::Repositories),
            Command::CollaboratorReport(_) => Some(ReportKind::Collaborators),
            Command::PackageReport(_) => Some(ReportKind::Packages),
            Command::AllReports(_) => None,
        }
    }
}
