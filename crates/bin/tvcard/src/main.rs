//! # tvcard — TV dashboard-card generator
//!
//! Scans the hub's entity list for a TV's `media_player`/`remote` pair and
//! writes a ready-to-paste dashboard card to `tv_remote_card.yaml`.
//!
//! Credentials come from `HUBSCOPE_URL`/`HUBSCOPE_TOKEN` or from the saved
//! credential file. The entity pair is picked automatically when the scan
//! finds exactly one of each; otherwise pass the entity ids as arguments:
//!
//! ```text
//! tvcard [media_player_id] [remote_id]
//! ```

use anyhow::{Context, bail};
use tracing_subscriber::EnvFilter;

use hubscope_adapter_hub_http::HttpHubClientFactory;
use hubscope_app::ports::{HubClient, HubClientFactory};
use hubscope_app::tv_card::{self, TvCandidate};
use hubscope_domain::credentials::HubCredentials;

const OUTPUT_FILE: &str = "tv_remote_card.yaml";

/// Resolve credentials from the environment, falling back to the saved
/// credential file.
fn resolve_credentials() -> anyhow::Result<HubCredentials> {
    if let (Ok(url), Ok(token)) = (
        std::env::var("HUBSCOPE_URL"),
        std::env::var("HUBSCOPE_TOKEN"),
    ) {
        return Ok(HubCredentials { url, token });
    }

    let path = std::env::var("HUBSCOPE_CREDENTIALS")
        .unwrap_or_else(|_| "hubscope_credentials.json".to_string());
    let content = std::fs::read_to_string(&path).with_context(|| {
        format!(
            "no credentials: set HUBSCOPE_URL and HUBSCOPE_TOKEN, or save a \
             connection in the web UI first (looked for {path})"
        )
    })?;
    serde_json::from_str(&content).with_context(|| format!("malformed credential file {path}"))
}

/// Pick the entity to use: explicit argument, else the single candidate.
fn pick(
    kind: &str,
    argument: Option<String>,
    candidates: &[TvCandidate],
) -> anyhow::Result<String> {
    if let Some(id) = argument {
        return Ok(id);
    }
    match candidates {
        [] => bail!(
            "no TV {kind} found; pass the entity id as an argument: \
             tvcard [media_player_id] [remote_id]"
        ),
        [only] => {
            println!("Using {}: {} ({})", kind, only.entity_id, only.name);
            Ok(only.entity_id.clone())
        }
        many => {
            println!("Found {} {kind} candidates:", many.len());
            for candidate in many {
                println!(
                    "  - {} ({}, state {})",
                    candidate.entity_id, candidate.name, candidate.state
                );
            }
            bail!("several {kind} candidates; pass the entity id as an argument")
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let media_player_arg = args.next();
    let remote_arg = args.next();

    let credentials = resolve_credentials()?;
    let client = HttpHubClientFactory::new().create(&credentials.url, &credentials.token);

    println!("Fetching entity states from {}...", credentials.url);
    let states = client
        .fetch_states()
        .await
        .context("could not fetch entity states from the hub")?;
    println!("Scanning {} entities for a TV...", states.len());

    let candidates = tv_card::find_candidates(&states);
    let media_player = pick("media player", media_player_arg, &candidates.media_players)?;
    let remote = pick("remote", remote_arg, &candidates.remotes)?;

    let card = tv_card::remote_card(&media_player, &remote);
    std::fs::write(OUTPUT_FILE, &card)
        .with_context(|| format!("could not write {OUTPUT_FILE}"))?;

    println!();
    println!("Card written to {OUTPUT_FILE}");
    println!();
    println!("To add it to your dashboard:");
    println!("  1. Open the dashboard and choose 'Edit dashboard'");
    println!("  2. Add a card and pick 'Manual'");
    println!("  3. Paste the contents of {OUTPUT_FILE} and save");
    Ok(())
}
