use std::path::Path;

use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use crate::config::{Config, create_default_config};
use crate::render::Render;

pub fn run(config_path: &Path, config: &Config, init: bool) -> Result<()> {
    if init {
        if config_path.exists() {
            anyhow::bail!("Config already exists at {}", config_path.display());
        }
        create_default_config(config_path)?;
        println!("Created {}", config_path.display().to_string().green());
        return Ok(());
    }

    let exists = if config_path.exists() {
        ""
    } else {
        " (not created, using defaults)"
    };

    println!("{}", "Paths".bold());
    println!("  Config:  {}{}", config_path.display(), exists.dimmed());
    println!("  Output:  {}", config.output.display());

    println!("{}", "Window".bold());
    println!("  Months before:  {}", config.window.months_before);
    println!("  Years after:    {}", config.window.years_after);
    println!(
        "  Today:          {}",
        config.window.resolve(Local::now().date_naive()).render()
    );

    println!("{}", "Source".bold());
    println!("  URL:         {}", config.source_url);
    println!("  Size limit:  {} bytes", config.size_limit_bytes);

    Ok(())
}
