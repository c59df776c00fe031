//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Mirror files from a GitHub repository subtree.
///
/// Recursively walks a directory inside a repository branch and downloads
/// every file whose name ends with the configured suffix, preserving the
/// remote directory structure under the local root.
#[derive(Parser, Debug)]
#[command(name = "ghfetch")]
#[command(author, version, about)]
pub struct Args {
    /// Full URL of the repository (e.g. https://github.com/owner/repo)
    pub repo_url: String,

    /// Branch name
    pub branch: String,

    /// Directory path inside the repository to walk ("." for the root)
    pub remote_dir: String,

    /// Local directory to mirror files into
    pub local_dir: PathBuf,

    /// GitHub token (falls back to the GITHUB_TOKEN environment variable)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Filename suffix selecting which files to download
    #[arg(short, long, default_value = ".md")]
    pub suffix: String,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}
