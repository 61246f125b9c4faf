use anyhow::{Context, Result};
use evreg_core::Store;
use owo_colors::OwoColorize;

pub fn run(mut store: Store, index: &str) -> Result<()> {
    let index = store.parse_index(index)?;
    let event = store
        .remove_at(index)
        .with_context(|| format!("Failed to save events to {}", store.path().display()))?;

    println!(
        "{}",
        format!("  Removed: {} (was index {})", event.name(), index).green()
    );

    Ok(())
}
