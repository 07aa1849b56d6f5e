use clap::Parser;
use crate::github::DEFAULT_API_BASE_URL;

#[derive(Parser)]
#[command(name = "github-repo-summary")]
#[command(about = "GitHub Repo Summary Extractor - Saves a summary of a user's repositories as JSON")]
#[command(version)]
pub struct Cli {
    /// GitHub username to fetch repositories for (omit for interactive mode)
    #[arg(long, short, env = "GITHUB_USERNAME")]
    pub username: Option<String>,

    /// Output file to save repository data
    #[arg(long, short, env = "GITHUB_REPOS_OUTPUT", default_value = "github_repos.json")]
    pub output: String,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,
}
