//! Surah metadata table
//!
//! Loaded once from `data/surah_meta.json` and read-only afterwards.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{DailyReadError, Result};

/// First surah of the reading cycle (Al-Fatihah is not part of it)
pub const FIRST_SURAH: u32 = 2;

/// Last surah of the reading cycle
pub const LAST_SURAH: u32 = 114;

/// One record of the metadata file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurahMeta {
    pub number: u32,
    pub name_en: String,
    pub ayah_count: u32,
}

/// Surah number to metadata
#[derive(Debug, Clone)]
pub struct SurahTable {
    surahs: BTreeMap<u32, SurahMeta>,
}

impl SurahTable {
    /// Load and validate the metadata file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DailyReadError::io(path, e))?;
        let entries: Vec<SurahMeta> =
            serde_json::from_str(&content).map_err(|e| DailyReadError::config("surah metadata", path, e))?;
        debug!("SurahTable::load: {} entries from {}", entries.len(), path.display());
        Self::from_entries(entries).map_err(|e| match e {
            DailyReadError::InvalidTable(message) => DailyReadError::config("surah metadata", path, message),
            other => other,
        })
    }

    /// Build a table from records
    ///
    /// The cycle endpoints must be present and every surah needs at least one ayah.
    pub fn from_entries(entries: impl IntoIterator<Item = SurahMeta>) -> Result<Self> {
        let mut surahs = BTreeMap::new();
        for entry in entries {
            if entry.ayah_count == 0 {
                return Err(DailyReadError::InvalidTable(format!(
                    "surah {} has no ayahs",
                    entry.number
                )));
            }
            let number = entry.number;
            if surahs.insert(number, entry).is_some() {
                return Err(DailyReadError::InvalidTable(format!("surah {} listed twice", number)));
            }
        }

        for required in [FIRST_SURAH, LAST_SURAH] {
            if !surahs.contains_key(&required) {
                return Err(DailyReadError::InvalidTable(format!(
                    "must include surah {} and {}",
                    FIRST_SURAH, LAST_SURAH
                )));
            }
        }

        Ok(Self { surahs })
    }

    pub fn get(&self, number: u32) -> Result<&SurahMeta> {
        self.surahs.get(&number).ok_or(DailyReadError::MissingSection(number))
    }

    pub fn ayah_count(&self, number: u32) -> Result<u32> {
        self.get(number).map(|s| s.ayah_count)
    }

    pub fn name(&self, number: u32) -> Result<&str> {
        self.get(number).map(|s| s.name_en.as_str())
    }

    /// Number of ayahs in one full pass of the cycle
    pub fn cycle_total(&self) -> u64 {
        self.surahs
            .range(FIRST_SURAH..=LAST_SURAH)
            .map(|(_, s)| u64::from(s.ayah_count))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.surahs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surahs.is_empty()
    }
}

/// The metadata file shipped at the workspace root
#[cfg(test)]
pub(crate) fn shipped_table() -> SurahTable {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/surah_meta.json");
    SurahTable::load(path).expect("shipped surah metadata")
}
