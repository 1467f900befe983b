//! Persisted reading state
//!
//! A small JSON file holding the next start position plus running counters.
//! Read once at startup and written once after the README has been updated.

use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{DailyReadError, Result};
use crate::meta::FIRST_SURAH;
use crate::pointer::Pointer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingState {
    pub surah: u32,
    pub ayah: u32,
    pub total_verses_read: u64,
    pub days_active: u64,
    pub last_update_date: Option<NaiveDate>,
}

impl Default for ReadingState {
    fn default() -> Self {
        Self {
            surah: FIRST_SURAH,
            ayah: 1,
            total_verses_read: 0,
            days_active: 0,
            last_update_date: None,
        }
    }
}

impl ReadingState {
    /// Load state, falling back to the cycle start when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No state file at {}, starting at the beginning", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| DailyReadError::io(path, e))?;
        let state: Self = serde_json::from_str(&content).map_err(|e| DailyReadError::config("state", path, e))?;
        debug!("ReadingState::load: {:?}", state);
        Ok(state)
    }

    /// Write state atomically: temp file in the same directory, fsync, rename
    ///
    /// An existing file keeps its permissions.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut content = serde_json::to_string_pretty(self).map_err(|e| DailyReadError::config("state", path, e))?;
        content.push('\n');

        let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(|e| DailyReadError::io(parent, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| DailyReadError::io(temp.path(), e))?;
        if let Ok(existing) = fs::metadata(path) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| DailyReadError::io(temp.path(), e))?;
        }
        temp.as_file().sync_all().map_err(|e| DailyReadError::io(temp.path(), e))?;
        temp.persist(path).map_err(|e| DailyReadError::io(path, e.error))?;

        debug!("ReadingState::save: wrote {}", path.display());
        Ok(())
    }

    pub fn pointer(&self) -> Pointer {
        Pointer::new(self.surah, self.ayah)
    }

    /// Account for one run on `today`.
    ///
    /// `days_active` counts distinct calendar dates, so a second run on the same
    /// date advances the pointer and verse total but not the day counter.
    pub fn record_day(&mut self, today: NaiveDate, verses: u32, next: Pointer) {
        if self.last_update_date != Some(today) {
            self.days_active += 1;
        }
        self.total_verses_read += u64::from(verses);
        self.surah = next.surah;
        self.ayah = next.ayah;
        self.last_update_date = Some(today);
    }
}
