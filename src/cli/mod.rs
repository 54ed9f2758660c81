//! Command-line interface for release-pr
//!
//! One implicit command: validate configuration, build the GitHub service,
//! run the release pass, and print a one-line summary. Flags mirror the
//! environment variables a CI job would set, so the binary works both
//! invoked by hand and as a workflow step.

pub mod style;

use anstream::println;
use clap::Parser;
use release_pr::config::{ReleaseConfig, parse_repo_slug};
use release_pr::error::{Error, Result};
use release_pr::platform::GitHubService;
use release_pr::release::{RunOutcome, run_release};
use style::{Stylize, check};

/// Maintain a release pull request with a generated Related Stories section
#[derive(Debug, Parser)]
#[command(name = "release-pr", version)]
pub struct Cli {
    /// Target repository as `owner/repo`
    #[arg(long, env = "GITHUB_REPOSITORY", value_name = "OWNER/REPO")]
    pub repo: String,

    /// Branch the release pull request merges into
    #[arg(long, env = "INPUT_BASE", value_name = "BRANCH")]
    pub base: String,

    /// Branch carrying the commits to be released
    #[arg(long, env = "INPUT_HEAD", value_name = "BRANCH")]
    pub head: String,

    /// Label added to the release pull request on creation
    #[arg(long, env = "INPUT_LABEL", value_name = "LABEL")]
    pub label: Option<String>,

    /// Refresh the section even when the commit range looks current
    #[arg(
        long,
        env = "INPUT_FORCE_UPDATING",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub force_updating: bool,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL (for GitHub Enterprise)
    #[arg(long, env = "GITHUB_API_URL", value_name = "URL")]
    pub api_url: Option<String>,
}

/// Execute the release run described by the parsed arguments.
pub async fn run(args: Cli) -> Result<()> {
    let token = args.token.filter(|t| !t.is_empty()).ok_or_else(|| {
        Error::Config("no GitHub token (set GITHUB_TOKEN or pass --token)".to_string())
    })?;
    let (owner, repo) = parse_repo_slug(&args.repo)?;
    if args.base.is_empty() || args.head.is_empty() {
        return Err(Error::Config(
            "base and head branches must be non-empty".to_string(),
        ));
    }

    let config = ReleaseConfig {
        owner,
        repo,
        base: args.base,
        head: args.head,
        label: args.label.filter(|l| !l.is_empty()),
        force_updating: args.force_updating,
    };

    let api_url = args.api_url.filter(|u| !u.is_empty());
    let platform = GitHubService::new(&token, config.owner.clone(), config.repo.clone(), api_url)?;

    let outcome = run_release(&platform, &config).await?;
    print_summary(&outcome, &config);
    Ok(())
}

/// Print the one-line human summary for a finished run.
fn print_summary(outcome: &RunOutcome, config: &ReleaseConfig) {
    match outcome {
        RunOutcome::NoNewCommits => {
            println!(
                "{}",
                format!(
                    "No new commits between {} and {}, nothing to do",
                    config.base, config.head
                )
                .muted()
            );
        }
        RunOutcome::AlreadyCurrent { number } => {
            println!(
                "{} {}",
                format!("#{number}").emphasis(),
                "is already up to date".muted()
            );
        }
        RunOutcome::Updated { number } => {
            println!(
                "{} Updated related stories on {}",
                check(),
                format!("#{number}").emphasis()
            );
        }
        RunOutcome::Created { number, labeled } => {
            if *labeled {
                println!(
                    "{} Created release pull request {} {}",
                    check(),
                    format!("#{number}").emphasis(),
                    format!(
                        "(labeled {})",
                        config.label.as_deref().unwrap_or_default()
                    )
                    .accent()
                );
            } else {
                println!(
                    "{} Created release pull request {}",
                    check(),
                    format!("#{number}").emphasis()
                );
            }
        }
    }
}
