use anyhow::Result;
use evreg_core::Store;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &Store) -> Result<()> {
    print(store);
    Ok(())
}

/// Print every event prefixed with the index used to confirm it.
pub fn print(store: &Store) {
    if store.is_empty() {
        println!("{}", "  No events registered yet.".dimmed());
        return;
    }

    for (index, event) in store.list() {
        println!("  {} {}", format!("{index}:").dimmed(), event.render());
    }
}
