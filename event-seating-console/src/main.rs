use std::sync::Arc;

use event_seating_config::get_config;
use event_seating_console::seed;
use event_seating_console::telemetry::setup_tracing;
use event_seating_console::{Console, ConsoleError};
use event_seating_core::{Seating, TableRegistry};
use event_seating_drafting::GeminiDrafter;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), ConsoleError> {
    let config = get_config()?;
    setup_tracing(&config.log_level);
    info!(?config, "starting up console...");

    let registry = TableRegistry::uniform(
        config.tables.count,
        config.tables.capacity,
        &config.tables.name_prefix,
    );
    let mut seating = Seating::new(registry);
    for participant in seed::participants(&config.seed, seating.registry()) {
        seating.admit(participant)?;
    }

    if config.drafting.api_key.is_none() {
        warn!("no drafting api key configured, drafted messages will be placeholders");
    }
    let drafter = Arc::new(GeminiDrafter::from_config(&config.drafting));
    let console = Console::new(seating, drafter, config.drafting.timeout());

    let snapshot = console.snapshot().await;
    for table in &snapshot.tables {
        info!(
            table = %table.id,
            count = table.count,
            capacity = table.capacity,
            full = table.is_full(),
            "table"
        );
    }
    info!(pending = snapshot.queue.len(), "participants waiting for a table");

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
