//! dailyread - rolling daily Quran reading tracker
//!
//! Keeps a pointer into the text (surah 2 through 114, wrapping back to
//! Al-Baqarah), advances it by a fixed number of ayahs each run, and rewrites
//! two marker-delimited blocks in a README: today's reading with progress
//! stats, and an ayah of the day fetched from a remote schedule.
//!
//! # Modules
//!
//! - [`pointer`] - position arithmetic and the daily reading summary
//! - [`meta`] - surah metadata table
//! - [`state`] - persisted pointer and counters
//! - [`quote`] - ayah-of-the-day client
//! - [`template`] - README block replacement
//! - [`runner`] - the full update sequence
//!
//! # Example
//!
//! ```ignore
//! use dailyread::{Pointer, SurahTable, compute_daily_reading};
//!
//! let table = SurahTable::load("data/surah_meta.json")?;
//! let reading = compute_daily_reading(Pointer::new(2, 280), 30, &table)?;
//! assert_eq!(reading.next, Pointer::new(3, 24));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod meta;
pub mod pointer;
pub mod progress;
pub mod quote;
pub mod runner;
pub mod state;
pub mod template;

pub use config::{Config, MarkersConfig, PathsConfig, QuoteConfig};
pub use error::DailyReadError;
pub use meta::{FIRST_SURAH, LAST_SURAH, SurahMeta, SurahTable};
pub use pointer::{DailyReading, Pointer, advance, compute_daily_reading, normalize};
pub use quote::{AyahOfTheDay, QuoteSource, TarteelClient};
pub use runner::{DayPlan, RunReport, plan_day, run_daily_update};
pub use state::ReadingState;
