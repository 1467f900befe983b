use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info};
use std::path::Path;

use dailyread::cli::{Cli, Command};
use dailyread::config::Config;
use dailyread::{TarteelClient, plan_day, run_daily_update};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => LevelFilter::Trace,
            "DEBUG" => LevelFilter::Debug,
            "INFO" => LevelFilter::Info,
            "WARN" | "WARNING" => LevelFilter::Warn,
            "ERROR" => LevelFilter::Error,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                LevelFilter::Info
            }
        },
        None => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .context("logger already initialized")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref(), &cli.root);
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref(), &cli.root).context("Failed to load configuration")?;
    let today = chrono::Local::now().date_naive();

    match cli.command.unwrap_or(Command::Update) {
        Command::Update => cmd_update(&config, &cli.root, today),
        Command::Preview => cmd_preview(&config, &cli.root, today),
    }
}

fn cmd_update(config: &Config, root: &Path, today: chrono::NaiveDate) -> Result<()> {
    info!("dailyread update for {}", today);
    let client = TarteelClient::from_config(&config.quote).context("Failed to build HTTP client")?;
    let report = run_daily_update(config, root, today, &client).context("Daily update failed")?;

    println!("{} {}", "✓".green(), report.plan.reading.summary);
    println!("  Next start: {}", report.plan.reading.next.to_string().cyan());
    Ok(())
}

fn cmd_preview(config: &Config, root: &Path, today: chrono::NaiveDate) -> Result<()> {
    let plan = plan_day(config, root, today).context("Failed to compute today's reading")?;
    println!("{}", plan.block);
    println!();
    println!("Next start: {}", plan.reading.next.to_string().cyan());
    Ok(())
}
