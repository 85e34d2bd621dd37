//! Command-line surface for the conference outreach toolkit.
//!
//! Usage:
//!   outreach scan <url>
//!   outreach draft <url> --tone friendly --notes "met at ICSE"
//!   outreach profile init

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use conference_scraper::PageFetcher;
use outreach_client::{GenerateEmailRequest, OutreachClient};

mod config;
mod render;

#[derive(Parser)]
#[command(name = "outreach")]
#[command(about = "Scrape conference pages and draft outreach emails")]
#[command(version)]
struct Cli {
    /// Path to the sender profile JSON file
    #[arg(long, global = true, default_value = "profile.json")]
    profile: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape a conference page and show what was found
    Scan {
        /// Conference page URL
        url: String,
        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Scrape a page and draft an outreach email via the backend
    Draft {
        /// Conference page URL
        url: String,
        /// Opportunity to ask about (reviewer, speaker, judge, ...)
        #[arg(long, default_value = "reviewer")]
        opportunity_type: String,
        /// Tone of the draft (professional, friendly, formal)
        #[arg(long, default_value = "professional")]
        tone: String,
        /// Extra notes for the draft to emphasize
        #[arg(long, default_value = "")]
        notes: String,
        /// Recipient addresses; defaults to the detected chair emails
        #[arg(long)]
        to: Option<String>,
        /// Print the draft as JSON
        #[arg(long)]
        json: bool,
        /// Also print a Gmail compose link
        #[arg(long)]
        gmail: bool,
    },
    /// Manage the sender profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Write a template profile file
    Init,
    /// Show the stored profile
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,conference_scraper=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { url, json } => scan(&url, json).await,
        Commands::Draft {
            url,
            opportunity_type,
            tone,
            notes,
            to,
            json,
            gmail,
        } => {
            draft(
                &cli.profile,
                &url,
                opportunity_type,
                tone,
                notes,
                to,
                json,
                gmail,
            )
            .await
        }
        Commands::Profile { action } => match action {
            ProfileAction::Init => config::init_profile(&cli.profile),
            ProfileAction::Show => config::show_profile(&cli.profile),
        },
    }
}

async fn scan(url: &str, json: bool) -> Result<()> {
    let fetcher = PageFetcher::new();
    let info = fetcher.scrape(url).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        render::print_conference(&info);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn draft(
    profile_path: &Path,
    url: &str,
    opportunity_type: String,
    tone: String,
    notes: String,
    to: Option<String>,
    json: bool,
    gmail: bool,
) -> Result<()> {
    let profile = config::load_profile(profile_path)?;
    let backend_url = config::backend_url(&profile)?;

    let fetcher = PageFetcher::new();
    let info = fetcher.scrape(url).await?;
    if !json {
        render::print_conference(&info);
        println!();
        println!("{}", "Generating draft...".dimmed());
    }

    let to = to.unwrap_or_else(|| {
        info.chairs
            .iter()
            .map(|c| c.email.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    });

    let request = GenerateEmailRequest::new(profile, info)
        .with_opportunity_type(opportunity_type)
        .with_tone(tone)
        .with_custom_notes(notes.trim());

    let client = OutreachClient::new(backend_url);
    let draft = client
        .generate_email(&request)
        .await
        .context("backend did not return a draft")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&draft)?);
    } else {
        render::print_draft(&draft, &to);
    }

    if gmail {
        println!();
        println!(
            "{} {}",
            "Gmail compose:".bold(),
            render::gmail_compose_url(&to, &draft.subject, &draft.body)
        );
    }
    Ok(())
}
