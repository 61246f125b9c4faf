use anyhow::{Context, Result};
use evreg_core::{NewEvent, Store};
use owo_colors::OwoColorize;

pub fn run(mut store: Store, new_event: NewEvent) -> Result<()> {
    let event = new_event.build()?;
    let name = event.name().to_string();

    store
        .register(event)
        .with_context(|| format!("Failed to save events to {}", store.path().display()))?;

    println!(
        "{}",
        format!("  Registered: {} (index {})", name, store.len() - 1).green()
    );

    Ok(())
}
