//! Demo Entry Point
//!
//! Wires the session and counter modules together over the in-memory
//! backends and walks one signed-in click session end to end. Uses
//! `anyhow` for startup errors; application-level failures surface as the
//! modules' own error types.

use std::sync::Arc;

use counter::models::LeaderboardEntry;
use counter::{CounterConfig, CounterStore, CounterViewModel, DocumentCounterStore};
use platform::config::{ConfigError, ProviderConfig};
use platform::memory::MemoryDocumentStore;
use session::{GuardState, MemoryIdentityProvider, RouteAccess, SessionGuard, SessionStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_EMAIL: &str = "demo@tally.local";
const DEMO_PASSWORD: &str = "demo-secret";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demo=info,session=info,counter=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Backend configuration gate: a partially configured environment is an
    // error, an unconfigured one falls back to the development project
    let config = match ProviderConfig::from_env() {
        Ok(config) => config,
        Err(err @ ConfigError::InvalidParameter { .. }) => return Err(err.into()),
        Err(err) => {
            tracing::warn!(error = %err, "Falling back to the development backend config");
            ProviderConfig::development()
        }
    };
    tracing::info!(project = %config.project_id, "Backend config loaded");

    // The in-memory backends stand in for the hosted project here
    let sessions = SessionStore::new(Arc::new(MemoryIdentityProvider::new()));
    let documents = Arc::new(MemoryDocumentStore::new());
    let counters = Arc::new(DocumentCounterStore::new(
        documents,
        CounterConfig::default(),
    ));

    let mut guard = SessionGuard::new(sessions.subscribe());
    sessions.start();
    tracing::info!(state = %guard.resolved().await?, "Session resolved");

    sessions.sign_up(DEMO_EMAIL, DEMO_PASSWORD).await?;
    let principal = loop {
        if let RouteAccess::Allow(principal) = guard.access() {
            break principal;
        }
        guard.next().await?;
    };
    tracing::info!(user = %principal.email, "Signed up and signed in");

    let view = CounterViewModel::new(counters.clone(), principal.id, principal.email.clone());
    view.hydrate().await?;
    for _ in 0..3 {
        view.increment().await?;
    }
    tracing::info!(count = view.count(), "Clicks recorded");

    let rows: Vec<LeaderboardEntry> = counters
        .list_all()
        .await?
        .iter()
        .map(LeaderboardEntry::from)
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);

    sessions.sign_out().await?;
    while guard.state() != GuardState::Anonymous {
        guard.next().await?;
    }
    tracing::info!("Signed out");

    sessions.dispose();
    Ok(())
}
