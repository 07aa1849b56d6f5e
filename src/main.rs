use clap::Parser;
use colored::*;
use github_repo_summary::cli::Cli;
use github_repo_summary::error::FetchError;
use github_repo_summary::github::{FetchConfig, RepoFetcher};
use github_repo_summary::types::RepoSummary;
use github_repo_summary::writer;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = FetchConfig {
        base_url: cli.api_base_url.clone(),
        ..FetchConfig::default()
    };

    match cli.username {
        Some(username) => {
            // Non-interactive mode: one attempt, non-zero exit on failure.
            if !run_once(&config, &username, Path::new(&cli.output)).await {
                std::process::exit(1);
            }
        }
        None => run_interactive(&config, Path::new(&cli.output)).await?,
    }

    Ok(())
}

/// Fetch one account and write the output file. Returns false on any
/// failure, including an empty or unknown account.
async fn run_once(config: &FetchConfig, username: &str, output: &Path) -> bool {
    println!("Fetching repos for user: {}", username.bold());

    let repos = match fetch(config, username).await {
        Ok(repos) => repos,
        Err(e) => {
            println!("{}", e.to_string().red());
            println!("{}", "Error fetching data.".red());
            return false;
        }
    };

    if repos.is_empty() {
        println!("{}", "No repos or invalid account".yellow());
        return false;
    }

    println!("Logging {} repos to {}...", repos.len(), output.display());
    if let Err(e) = writer::write_repos(&repos, output) {
        println!("{}", e.to_string().red());
        return false;
    }

    println!("{}", format!("Repos logged to {}", output.display()).green());
    true
}

async fn fetch(config: &FetchConfig, username: &str) -> Result<Vec<RepoSummary>, FetchError> {
    // A fresh fetcher per attempt keeps the HTTP session scoped to one fetch.
    let fetcher = RepoFetcher::new(config.clone())?;
    fetcher.fetch_user_repos(username).await
}

/// Prompt loop: fetch accounts until the user types `exit`. Failures are
/// reported per attempt and never terminate the loop.
async fn run_interactive(config: &FetchConfig, output: &Path) -> anyhow::Result<()> {
    println!("{}", "Welcome to GitHub Repo Summary Extractor".bold().green());
    println!("{}", "=".repeat(50).dimmed());

    loop {
        print!("Enter username (or 'exit' to quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // EOF on stdin ends the session like an explicit exit.
            break;
        }

        let username = line.trim();
        if username.eq_ignore_ascii_case("exit") {
            break;
        }
        if username.is_empty() {
            continue;
        }

        run_once(config, username, output).await;
    }

    Ok(())
}
