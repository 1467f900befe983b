//! The daily update sequence
//!
//! load metadata → load state → compute reading → fetch ayah of the day →
//! rewrite README → save state. Any failure returns before the state file is
//! touched.

use chrono::NaiveDate;
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{DailyReadError, Result};
use crate::meta::SurahTable;
use crate::pointer::{DailyReading, compute_daily_reading};
use crate::progress::{BAR_LENGTH, progress_bar, reading_block, stats_line};
use crate::quote::{AyahOfTheDay, QuoteSource};
use crate::state::ReadingState;
use crate::template::replace_block;

/// Today's reading and the state that will be saved once the README is written
#[derive(Debug, Clone)]
pub struct DayPlan {
    pub reading: DailyReading,
    pub state: ReadingState,
    /// Rendered READING block
    pub block: String,
}

/// What a completed run did
#[derive(Debug, Clone)]
pub struct RunReport {
    pub plan: DayPlan,
    pub ayah: AyahOfTheDay,
}

/// Compute today's reading without touching the filesystem beyond reads
pub fn plan_day(config: &Config, root: &Path, today: NaiveDate) -> Result<DayPlan> {
    let paths = config.paths.resolve(root);

    let table = SurahTable::load(&paths.surah_meta)?;
    let mut state = ReadingState::load(&paths.state)?;
    debug!("plan_day: starting from {}", state.pointer());

    let reading = compute_daily_reading(state.pointer(), config.daily_verses, &table)?;
    state.record_day(today, reading.count, reading.next);

    let bar = progress_bar(state.total_verses_read, table.cycle_total(), BAR_LENGTH);
    let stats = stats_line(state.total_verses_read, state.days_active);
    let block = reading_block(&reading.summary, &bar, &stats);

    Ok(DayPlan { reading, state, block })
}

/// Run the full update
pub fn run_daily_update(
    config: &Config,
    root: &Path,
    today: NaiveDate,
    source: &dyn QuoteSource,
) -> Result<RunReport> {
    let paths = config.paths.resolve(root);
    let plan = plan_day(config, root, today)?;
    info!("{}", plan.reading.summary);

    let ayah = source.fetch()?;
    info!("Ayah of the day: {}:{}", ayah.surah, ayah.ayah);

    let markers = &config.markers;
    let markdown = fs::read_to_string(&paths.readme).map_err(|e| DailyReadError::io(&paths.readme, e))?;
    let markdown = replace_block(&markdown, &markers.reading_start, &markers.reading_end, &plan.block)?;
    let markdown = replace_block(
        &markdown,
        &markers.ayahaday_start,
        &markers.ayahaday_end,
        &ayah.to_markdown(),
    )?;
    fs::write(&paths.readme, markdown).map_err(|e| DailyReadError::io(&paths.readme, e))?;

    plan.state.save(&paths.state)?;
    info!("Next reading starts at {}", plan.reading.next);

    Ok(RunReport { plan, ayah })
}
