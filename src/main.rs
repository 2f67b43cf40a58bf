//! octo-reports - Main entry point

use clap::Parser;
use log::{debug, error, info};
use std::process::ExitCode;

use octo_reports::{
    print_summary, resolve_token, resolve_url, run_all_reports, run_report, Cli,
    GitHubClient, ReportOptions, ReportOutcome, SettingsStore,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting octo-reports v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every requested report succeeded
async fn run(cli: &Cli) -> octo_reports::Result<bool> {
    let settings = SettingsStore::locate(cli.config.as_deref()).load()?;
    let token = resolve_token(cli.token.as_deref(), &settings)?;
    let url = resolve_url(cli.url.as_deref(), &settings);

    debug!(
        "CLI args: command={:?}, url={}, output_dir={}, concurrency={}, batch={}",
        cli.command,
        url,
        cli.output_dir.display(),
        cli.concurrency,
        cli.batch
    );

    let client = GitHubClient::new(token, url);
    let options = ReportOptions {
        output_dir: cli.output_dir.clone(),
        concurrency: usize::from(cli.concurrency),
        batch: cli.batch,
    };

    let scope = cli.command.scope();
    let outcomes = match cli.command.report() {
        Some(kind) => {
            let result = run_report(&client, kind, scope, &options).await;
            if let Err(e) = &result {
                error!("The {} report failed: {}", kind, e);
            }
            vec![ReportOutcome { kind, result }]
        }
        None => run_all_reports(&client, scope, &options).await,
    };

    if !cli.batch {
        print_summary(&outcomes);
    }

    let succeeded = outcomes.iter().all(ReportOutcome::is_success);
    if succeeded {
        info!("Completed successfully");
    } else {
        info!("Completed with some errors");
    }

    Ok(succeeded)
}
