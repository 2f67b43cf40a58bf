//! Output formatting module
//!
//! Flattens report trees into CSV rows and writes them, one schema per
//! report kind.

mod collaborators;
mod common;
mod csv;
mod enterprise_members;
mod org_memberships;
mod packages;
mod repos;
mod table;
mod teams;

pub use self::collaborators::CollaboratorRow;
pub use self::common::{format_bool, format_timestamp, join_logins, render_list};
pub use self::csv::{write_report, write_rows, EmitSummary};
pub use self::enterprise_members::EnterpriseMemberRow;
pub use self::org_memberships::OrgMembershipRow;
pub use self::packages::PackageRow;
pub use self::repos::RepoRow;
pub use self::table::{print_summary, summary_table};
pub use self::teams::TeamRow;

/// One flat output record with a fixed column schema
pub trait ReportRow {
    /// Column names, written as the first line of every file
    const HEADER: &'static [&'static str];

    /// Field values in `HEADER` order
    fn record(&self) -> Vec<String>;
}
