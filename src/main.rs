//! CLI entry point for the ghfetch tool.

use anyhow::Result;
use clap::Parser;
use ghfetch_core::{GithubClient, RepoRef, TreeLocation, resolve_token, walk_tree};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(
        repo_url = %args.repo_url,
        branch = %args.branch,
        remote_dir = %args.remote_dir,
        local_dir = %args.local_dir.display(),
        suffix = %args.suffix,
        "CLI arguments parsed"
    );

    // Fatal precondition: the token must be resolvable before any network call.
    let token = resolve_token(args.token)?;

    let repo = RepoRef::parse(&args.repo_url)?;
    let root = TreeLocation::new(repo, args.branch.as_str(), args.remote_dir.as_str());
    info!(root = %root, suffix = %args.suffix, "starting walk");

    let client = GithubClient::new(token);
    let suffix = args.suffix;
    let summary = walk_tree(&client, &root, &args.local_dir, |name| {
        name.ends_with(&suffix)
    })
    .await?;

    info!(
        files = summary.files_downloaded,
        directories = summary.directories_listed,
        "download completed successfully"
    );

    Ok(())
}
