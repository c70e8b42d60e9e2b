use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use icstrim_core::{DateWindow, WindowConfig, trim_feed};
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::render::{Render, render_size};
use crate::source::FeedSource;
use crate::utils::tui::with_spinner;

/// Command line overrides for a trim run. `None` means "use the config".
#[derive(Debug, Default, Clone)]
pub struct TrimArgs {
    pub url: Option<String>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub months_before: Option<u32>,
    pub years_after: Option<u32>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Settings for one run, with config and flags already merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimPlan {
    pub source: FeedSource,
    pub output: PathBuf,
    pub window: DateWindow,
    pub size_limit_bytes: u64,
}

impl TrimPlan {
    pub fn resolve(config: Config, args: TrimArgs, today: NaiveDate) -> Result<Self> {
        let offsets = WindowConfig {
            months_before: args.months_before.unwrap_or(config.window.months_before),
            years_after: args.years_after.unwrap_or(config.window.years_after),
        };
        let window = DateWindow::from_args(
            args.from.as_deref(),
            args.to.as_deref(),
            offsets.resolve(today),
        )?;

        let source = match args.input {
            Some(path) => FeedSource::File(path),
            None => FeedSource::Url(args.url.unwrap_or(config.source_url)),
        };

        Ok(TrimPlan {
            source,
            output: args.output.unwrap_or(config.output),
            window,
            size_limit_bytes: config.size_limit_bytes,
        })
    }
}

pub async fn run(config: Config, args: TrimArgs) -> Result<()> {
    let plan = TrimPlan::resolve(config, args, Local::now().date_naive())?;

    let raw = with_spinner(plan.source.render(), plan.source.load()).await?;

    if raw.trim().is_empty() {
        anyhow::bail!("No calendar data received from {}", plan.source);
    }

    println!("Loaded calendar: {} characters", raw.chars().count());
    println!("Keeping events from {}", plan.window.render());

    let trimmed = trim_feed(&raw, &plan.window);
    println!("{}", trimmed.render());

    if trimmed.kept_records == 0 {
        log::warn!("no events inside {}; writing an empty calendar", plan.window);
    }

    std::fs::write(&plan.output, &trimmed.text)
        .with_context(|| format!("Failed to write calendar to {}", plan.output.display()))?;

    println!("{}", render_size(&trimmed, plan.size_limit_bytes));
    println!(
        "\nSaved to {}",
        plan.output.display().to_string().bold()
    );

    Ok(())
}
