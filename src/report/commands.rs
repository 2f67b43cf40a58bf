//! Report command handlers

use log::{error, info};
use std::path::PathBuf;
use std::time::Instant;

use crate::error::Result;
use crate::github::GitHubClient;
use crate::output::{
    write_report, CollaboratorRow, EmitSummary, EnterpriseMemberRow, OrgMembershipRow, PackageRow,
    RepoRow, ReportRow, TeamRow,
};
use crate::ui::{abandon_spinner, create_spinner, finish_spinner};

use super::{Aggregator, ReportKind};

/// Settings shared by every report of a run
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub output_dir: PathBuf,
    pub concurrency: usize,
    /// No spinners
    pub batch: bool,
}

/// Result of one report, kept for the run summary
#[derive(Debug)]
pub struct ReportOutcome {
    pub kind: ReportKind,
    pub result: Result<EmitSummary>,
}

impl ReportOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

fn emit<R: ReportRow>(options: &ReportOptions, kind: ReportKind, rows: &[R]) -> Result<EmitSummary> {
    write_report(&options.output_dir, kind.file_name(), rows)
}

/// Build one report for `scope` and write its file
///
/// `scope` is the enterprise slug, or the organization login for the
/// collaborator and package reports. The whole tree is fetched before the
/// file is created, so a failed fetch leaves no file behind.
pub async fn run_report(
    client: &GitHubClient,
    kind: ReportKind,
    scope: &str,
    options: &ReportOptions,
) -> Result<EmitSummary> {
    let aggregator = Aggregator::new(client, options.concurrency);
    let spinner = create_spinner(
        &format!("Building {} report for {}...", kind, scope),
        options.batch,
    );
    let start = Instant::now();

    let result = match kind {
        ReportKind::EnterpriseMembership => aggregator
            .enterprise_members(scope)
            .await
            .and_then(|tree| emit(options, kind, &EnterpriseMemberRow::from_members(&tree))),
        ReportKind::OrgMembership => aggregator
            .org_memberships(scope)
            .await
            .and_then(|tree| emit(options, kind, &OrgMembershipRow::from_tree(&tree))),
        ReportKind::Teams => aggregator
            .org_teams(scope)
            .await
            .and_then(|tree| emit(options, kind, &TeamRow::from_tree(&tree))),
        ReportKind::Repositories => aggregator
            .org_repositories(scope)
            .await
            .and_then(|tree| emit(options, kind, &RepoRow::from_tree(&tree))),
        ReportKind::Collaborators => aggregator
            .repository_collaborators(scope)
            .await
            .and_then(|tree| emit(options, kind, &CollaboratorRow::from_tree(&tree))),
        ReportKind::Packages => aggregator
            .org_packages(scope)
            .await
            .and_then(|tree| emit(options, kind, &PackageRow::from_tree(&tree))),
    };

    match &result {
        Ok(summary) => {
            info!(
                "Finished {} report: {} rows in {:?}",
                kind,
                summary.rows_written,
                start.elapsed()
            );
            finish_spinner(
                spinner,
                &format!(
                    "Wrote {} rows to {}",
                    summary.rows_written,
                    summary.path.display()
                ),
            );
        }
        Err(_) => abandon_spinner(spinner),
    }

    result
}

/// Run every enterprise report in turn
///
/// A failed report is logged and recorded; the remaining reports still run.
pub async fn run_all_reports(
    client: &GitHubClient,
    enterprise_slug: &str,
    options: &ReportOptions,
) -> Vec<ReportOutcome> {
    let mut outcomes = Vec::with_capacity(ReportKind::ENTERPRISE.len());

    for kind in ReportKind::ENTERPRISE {
        let result = run_report(client, kind, enterprise_slug, options).await;
        if let Err(e) = &result {
            error!("The {} report failed: {}", kind, e);
        }
        outcomes.push(ReportOutcome { kind, result });
    }

    outcomes
}
