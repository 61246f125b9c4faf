use anyhow::Result;
use evreg_core::EvregConfig;
use owo_colors::OwoColorize;

pub fn run(config: &EvregConfig) -> Result<()> {
    let path = EvregConfig::config_path()?;

    println!("{} {}", "Config file:".dimmed(), path.display());
    println!("{} {}", "Data file:".dimmed(), config.data_path().display());
    println!();
    print!("{}", config.to_toml()?);

    Ok(())
}
