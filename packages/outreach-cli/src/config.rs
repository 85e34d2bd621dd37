//! Sender profile storage: a JSON file, environment overrides on top.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use outreach_client::Profile;

/// Environment override for the backend base URL.
pub const BACKEND_URL_ENV: &str = "OUTREACH_BACKEND_URL";

/// Load the sender profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<Profile> {
    let raw = fs::read_to_string(path).with_context(|| {
        format!(
            "failed to read profile {} (run `outreach profile init` first)",
            path.display()
        )
    })?;
    let profile: Profile = serde_json::from_str(&raw)
        .with_context(|| format!("invalid profile JSON in {}", path.display()))?;
    Ok(profile)
}

/// Resolve the backend base URL: environment first, then the profile.
pub fn backend_url(profile: &Profile) -> Result<String> {
    if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
        if !url.trim().is_empty() {
            return Ok(url.trim().to_string());
        }
    }
    match profile.backend_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => bail!(
            "backend URL not configured; set {} or `backendUrl` in the profile",
            BACKEND_URL_ENV
        ),
    }
}

/// Write a template profile for the user to fill in.
pub fn init_profile(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    let template = Profile {
        full_name: "Ada Lovelace".to_string(),
        title: "Assistant Professor".to_string(),
        affiliation: "University of Examples".to_string(),
        short_bio: "Works on program analysis and empirical software engineering.".to_string(),
        keywords: "program analysis, testing, empirical SE".to_string(),
        email: "ada@example.edu".to_string(),
        backend_url: Some("http://localhost:8000".to_string()),
    };
    fs::write(path, serde_json::to_string_pretty(&template)?)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!(
        "{} {}",
        "Wrote template profile to".green(),
        path.display()
    );
    Ok(())
}

/// Pretty-print the stored profile.
pub fn show_profile(path: &Path) -> Result<()> {
    let profile = load_profile(path)?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}
