use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use jobscout_boards::{BoardError, JobBoard, RemotiveClient, SearchRequest, Site, ThemuseClient};
use jobscout_cli::{export, table};
use jobscout_common::observability::{init_logging, LogConfig, LogFormat};
use jobscout_common::sort_newest_first;
use jobscout_config::{JobscoutConfig, JobscoutConfigLoader};
use std::path::PathBuf;
use std::time::Duration;

/// Search recent job postings on public job-board APIs and export them.
#[derive(Parser, Debug)]
#[command(name = "jobscout", version, about)]
struct Cli {
    /// Job site to query (themuse, remotive, indeed, linkedin).
    #[arg(short, long)]
    site: Option<Site>,

    /// Keywords to search for, e.g. "software engineer".
    #[arg(short, long)]
    query: String,

    /// Optional location filter, e.g. "Philadelphia, PA".
    #[arg(short, long)]
    location: Option<String>,

    /// Maximum age of postings in days. 0 disables recency filtering.
    #[arg(short, long)]
    days: Option<u32>,

    /// Maximum number of results to return.
    #[arg(short, long)]
    max_results: Option<usize>,

    /// Output file; .json and .csv are supported. Omit for a console table.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file; defaults to ./jobscout.yaml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log encoding for the rolling log file.
    #[arg(long, value_enum, default_value_t = LogFormatArg::Text)]
    log_format: LogFormatArg,

    /// Duplicate logs to stderr at debug level.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => JobscoutConfigLoader::new().with_file(path).load()?,
        None => JobscoutConfigLoader::new()
            .with_optional_file("jobscout.yaml")
            .load()?,
    };

    init_logging(LogConfig {
        format: cli.log_format.into(),
        emit_stderr: cli.verbose,
        default_filter: if cli.verbose { "debug" } else { "info" },
        ..Default::default()
    })?;

    let site = match cli.site {
        Some(site) => site,
        None => cfg.defaults.site.parse::<Site>().map_err(|e| anyhow!(e))?,
    };

    let days = cli.days.unwrap_or(cfg.defaults.days);
    let request = SearchRequest {
        query: cli.query,
        location: cli.location,
        // --days 0 means "no recency filter" for parity with the flag docs.
        days: (days > 0).then_some(days),
        max_results: Some(cli.max_results.unwrap_or(cfg.defaults.max_results)),
    };

    let board = build_board(site, &cfg)?;
    tracing::info!(
        site = %site,
        query = %request.query,
        location = ?request.location,
        days = ?request.days,
        max_results = ?request.max_results,
        "search.start"
    );

    let mut jobs = board.search(&request).await?;
    sort_newest_first(&mut jobs);

    match &cli.output {
        Some(path) => {
            export::write_output(&jobs, path)?;
            println!("Wrote {} jobs to {}", jobs.len(), path.display());
        }
        None => print!("{}", table::render(&jobs)),
    }

    Ok(())
}

/// Construct the client for the chosen site, applying config overrides.
fn build_board(site: Site, cfg: &JobscoutConfig) -> Result<Box<dyn JobBoard>> {
    let timeout = Duration::from_secs(cfg.http.timeout_secs);
    let retries = cfg.http.retries;

    let board: Box<dyn JobBoard> = match site {
        Site::Themuse => Box::new(
            ThemuseClient::new(&cfg.boards.themuse.endpoint)?
                .with_api_key(cfg.boards.themuse.api_key.clone())
                .with_timeout(timeout)
                .with_retries(retries),
        ),
        Site::Remotive => Box::new(
            RemotiveClient::new(&cfg.boards.remotive.endpoint)?
                .with_timeout(timeout)
                .with_retries(retries),
        ),
        other => {
            let reason = other
                .unsupported_reason()
                .unwrap_or("no client implemented");
            return Err(BoardError::Unsupported {
                site: other,
                reason,
            }
            .into());
        }
    };
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_declaration_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn unknown_site_fails_to_parse() {
        let result = Cli::try_parse_from(["jobscout", "-q", "rust", "--site", "monster"]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("monster"));
    }

    #[test]
    fn unsupported_board_is_a_build_error() {
        let cfg = JobscoutConfig::default();
        let err = build_board(Site::Linkedin, &cfg)
            .err()
            .expect("unsupported board must fail");
        assert!(err.to_string().contains("linkedin is not supported"));
    }

    #[test]
    fn supported_boards_build() {
        let cfg = JobscoutConfig::default();
        assert!(build_board(Site::Themuse, &cfg).is_ok());
        assert!(build_board(Site::Remotive, &cfg).is_ok());
    }
}
