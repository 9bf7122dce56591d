//! `repo-contributions` command-line interface.
//!
//! ```bash
//! repo-contributions octo demo alice --since 2024-01-01 --branch main --branch dev
//! ```
//!
//! Links go to stdout, logs and errors to stderr.

use std::process::ExitCode;
use std::time::Duration;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repo_contributions::summary::{DEFAULT_CHAT_MODEL, DEFAULT_CHAT_URL};
use repo_contributions::{
    render_links, render_report, ChatSummarizer, ClientConfig, ContributionsClient, Error,
    SearchConfig, Summarizer, NO_MATCHES_MESSAGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One link per line
    Links,
    /// Kind, date, link and title per line
    Report,
    /// JSON array of items
    Json,
}

/// List a user's commits, issues and pull requests in one repository as
/// plain-text links, newest first.
#[derive(Parser, Debug)]
#[command(name = "repo-contributions", version)]
struct Cli {
    /// Repository owner
    owner: String,

    /// Repository name
    repo: String,

    /// Author username
    username: String,

    /// Earliest contribution date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    since: NaiveDate,

    /// Branch to scan for commits; repeat for several. Defaults to the
    /// repository's default branch.
    #[arg(long = "branch", value_delimiter = ',')]
    branches: Vec<String>,

    /// Access token for the hosting API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = repo_contributions::config::DEFAULT_BASE_URL)]
    api_url: String,

    /// Per-request timeout in seconds
    #[arg(
        long,
        default_value_t = repo_contributions::config::DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Links)]
    format: Format,

    /// Append a generated prose summary
    #[arg(long)]
    summary: bool,

    /// Name used in the summary (defaults to the username)
    #[arg(long)]
    display_name: Option<String>,

    /// API key for the summary service
    #[arg(long, env = "SUMMARY_API_KEY", hide_env_values = true)]
    summary_api_key: Option<String>,

    /// Chat completions endpoint for the summary service
    #[arg(long, env = "SUMMARY_API_URL", default_value = DEFAULT_CHAT_URL)]
    summary_api_url: String,

    /// Model for the summary service
    #[arg(long, env = "SUMMARY_MODEL", default_value = DEFAULT_CHAT_MODEL)]
    summary_model: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repo_contributions=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let timeout = Duration::from_secs(cli.timeout);
    let client = ContributionsClient::new(Some(ClientConfig {
        base_url: cli.api_url.clone(),
        timeout,
        ..ClientConfig::default()
    }))?;

    let summarizer = if cli.summary {
        let api_key = cli.summary_api_key.as_deref().ok_or_else(|| {
            Error::Configuration("--summary requires SUMMARY_API_KEY or --summary-api-key".to_string())
        })?;
        Some(ChatSummarizer::new(
            api_key,
            Some(&cli.summary_api_url),
            Some(&cli.summary_model),
            timeout,
        )?)
    } else {
        None
    };

    let mut builder = SearchConfig::builder(&cli.owner, &cli.repo, &cli.username, cli.since)
        .branches(cli.branches.iter().cloned());
    if let Some(token) = &cli.token {
        builder = builder.token(token);
    }
    let config = builder.build();

    let items = client.collect(&config).await?;

    if items.is_empty() {
        println!("{}", empty_output(cli.format));
        return Ok(());
    }

    match cli.format {
        Format::Links => println!("{}", render_links(&items)),
        Format::Report => println!("{}", render_report(&items)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&items)?),
    }

    if let Some(summarizer) = &summarizer {
        let display_name = cli.display_name.as_deref().unwrap_or(&cli.username);
        println!("\n{}", summarizer.summarize(&items, display_name).await);
    }

    Ok(())
}

/// What to print when nothing matched; JSON stays machine-readable.
fn empty_output(format: Format) -> &'static str {
    match format {
        Format::Json => "[]",
        Format::Links | Format::Report => NO_MATCHES_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARGS: [&str; 6] = ["repo-contributions", "octo", "demo", "alice", "--since", "2024-01-01"];

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = Cli::try_parse_from(ARGS.iter().copied().chain(["--timeout", "0"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_timeout_defaults_and_accepts_positive() {
        let cli = Cli::try_parse_from(ARGS).expect("defaults should parse");
        assert_eq!(cli.timeout, repo_contributions::config::DEFAULT_TIMEOUT_SECS);

        let cli = Cli::try_parse_from(ARGS.iter().copied().chain(["--timeout", "1"]))
            .expect("positive timeout should parse");
        assert_eq!(cli.timeout, 1);
    }

    #[test]
    fn test_empty_json_output_is_an_empty_array() {
        assert_eq!(empty_output(Format::Json), "[]");
        let parsed: Vec<serde_json::Value> =
            serde_json::from_str(empty_output(Format::Json)).expect("valid JSON");
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_empty_text_output_is_the_no_matches_message() {
        assert_eq!(empty_output(Format::Links), NO_MATCHES_MESSAGE);
        assert_eq!(empty_output(Format::Report), NO_MATCHES_MESSAGE);
    }
}
