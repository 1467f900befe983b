//! Reading pointer arithmetic over the surah/ayah cycle
//!
//! The cycle runs surah 2 through 114 and wraps back to 2:1. Positions past the
//! end of a surah spill into the following surahs; anything past surah 114
//! restarts the cycle.

use log::debug;
use std::fmt;

use crate::error::{DailyReadError, Result};
use crate::meta::{FIRST_SURAH, LAST_SURAH, SurahTable};

/// A position in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    pub surah: u32,
    pub ayah: u32,
}

impl Pointer {
    pub const fn new(surah: u32, ayah: u32) -> Self {
        Self { surah, ayah }
    }

    /// Start of the cycle
    pub const fn start() -> Self {
        Self::new(FIRST_SURAH, 1)
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.surah, self.ayah)
    }
}

/// One day's reading range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReading {
    /// `Today's reading: ...` line
    pub summary: String,
    /// First ayah read, inclusive
    pub start: Pointer,
    /// Last ayah read, inclusive
    pub end: Pointer,
    /// Where tomorrow starts
    pub next: Pointer,
    pub count: u32,
}

/// Fold an arbitrary (surah, ayah) pair onto a valid position in the cycle.
///
/// Surahs before the cycle and ayah 0 map to the cycle start.
pub fn normalize(surah: u32, ayah: u32, table: &SurahTable) -> Result<Pointer> {
    let (mut surah, mut ayah) = if surah < FIRST_SURAH || ayah == 0 {
        (FIRST_SURAH, 1)
    } else {
        (surah, ayah)
    };

    loop {
        if surah > LAST_SURAH {
            surah = FIRST_SURAH;
            ayah = 1;
        }

        let count = table.ayah_count(surah)?;
        if ayah <= count {
            return Ok(Pointer::new(surah, ayah));
        }

        ayah -= count;
        surah += 1;
    }
}

/// Move `steps` ayahs forward from (surah, ayah), wrapping at the end of the cycle.
pub fn advance(surah: u32, ayah: u32, steps: u32, table: &SurahTable) -> Result<Pointer> {
    let mut cur = normalize(surah, ayah, table)?;
    let mut remaining = steps;

    while remaining > 0 {
        let max_ayah = table.ayah_count(cur.surah)?;
        let available = max_ayah - cur.ayah + 1;
        let take = remaining.min(available);

        remaining -= take;
        let ayah = cur.ayah + take;

        cur = if ayah > max_ayah {
            normalize(cur.surah + 1, 1, table)?
        } else {
            Pointer::new(cur.surah, ayah)
        };
    }

    Ok(cur)
}

/// Work out today's `count` ayahs starting at `start`, and where tomorrow begins.
pub fn compute_daily_reading(start: Pointer, count: u32, table: &SurahTable) -> Result<DailyReading> {
    debug!("compute_daily_reading: start={} count={}", start, count);
    if count == 0 {
        return Err(DailyReadError::InvalidCount(count));
    }

    let start = normalize(start.surah, start.ayah, table)?;
    let end = advance(start.surah, start.ayah, count - 1, table)?;

    let start_name = table.name(start.surah)?;
    let end_name = table.name(end.surah)?;

    // A range within one surah only when the reading did not go round the cycle
    let within_surah = start.surah == end.surah && end.ayah >= start.ayah && end.ayah - start.ayah + 1 == count;

    let summary = if count == 1 {
        format!("Today's reading: {} {} (1 verse)", start_name, start)
    } else if within_surah {
        format!(
            "Today's reading: {} {}–{} ({} verses)",
            start_name, start, end.ayah, count
        )
    } else {
        format!(
            "Today's reading: {} {} → {} {} ({} verses)",
            start_name, start, end_name, end, count
        )
    };

    let next = advance(end.surah, end.ayah, 1, table)?;
    debug!("compute_daily_reading: end={} next={}", end, next);

    Ok(DailyReading {
        summary,
        start,
        end,
        next,
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::{SurahMeta, shipped_table};
    use proptest::prelude::*;

    fn small_table() -> SurahTable {
        SurahTable::from_entries(vec![
            SurahMeta {
                number: 2,
                name_en: "Al-Baqarah".to_string(),
                ayah_count: 286,
            },
            SurahMeta {
                number: 114,
                name_en: "An-Nas".to_string(),
                ayah_count: 6,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_normalize_in_range_is_unchanged() {
        let table = shipped_table();
        assert_eq!(normalize(2, 1, &table).unwrap(), Pointer::new(2, 1));
        assert_eq!(normalize(114, 6, &table).unwrap(), Pointer::new(114, 6));
    }

    #[test]
    fn test_normalize_spills_into_next_surah() {
        let table = shipped_table();
        assert_eq!(normalize(2, 287, &table).unwrap(), Pointer::new(3, 1));
        // 286 + 200 + 3
        assert_eq!(normalize(2, 489, &table).unwrap(), Pointer::new(4, 3));
    }

    #[test]
    fn test_normalize_past_end_restarts_cycle() {
        let table = shipped_table();
        assert_eq!(normalize(115, 1, &table).unwrap(), Pointer::start());
        assert_eq!(normalize(114, 7, &table).unwrap(), Pointer::start());
    }

    #[test]
    fn test_normalize_before_cycle() {
        let table = shipped_table();
        assert_eq!(normalize(1, 3, &table).unwrap(), Pointer::start());
        assert_eq!(normalize(0, 0, &table).unwrap(), Pointer::start());
        assert_eq!(normalize(5, 0, &table).unwrap(), Pointer::start());
    }

    #[test]
    fn test_normalize_missing_section_is_fatal() {
        let table = small_table();
        let err = normalize(2, 300, &table).unwrap_err();
        assert!(matches!(err, DailyReadError::MissingSection(3)));
        assert!(err.is_config());
    }

    #[test]
    fn test_advance_zero_steps() {
        let table = shipped_table();
        assert_eq!(advance(2, 10, 0, &table).unwrap(), Pointer::new(2, 10));
        assert_eq!(advance(2, 287, 0, &table).unwrap(), Pointer::new(3, 1));
    }

    #[test]
    fn test_advance_exhausting_surah_lands_on_next() {
        let table = shipped_table();
        assert_eq!(advance(2, 280, 7, &table).unwrap(), Pointer::new(3, 1));
        assert_eq!(advance(2, 286, 1, &table).unwrap(), Pointer::new(3, 1));
    }

    #[test]
    fn test_advance_wraps_at_end() {
        let table = shipped_table();
        assert_eq!(advance(114, 6, 1, &table).unwrap(), Pointer::new(2, 1));
        assert_eq!(advance(113, 5, 7, &table).unwrap(), Pointer::new(2, 1));
        assert_eq!(advance(114, 1, 10, &table).unwrap(), Pointer::new(2, 5));
    }

    #[test]
    fn test_advance_full_cycle_returns_to_start() {
        let table = shipped_table();
        let total = table.cycle_total() as u32;
        assert_eq!(advance(2, 1, total, &table).unwrap(), Pointer::new(2, 1));
        assert_eq!(advance(40, 12, total, &table).unwrap(), Pointer::new(40, 12));
    }

    #[test]
    fn test_daily_reading_same_surah() {
        let table = shipped_table();
        let reading = compute_daily_reading(Pointer::new(2, 1), 30, &table).unwrap();
        assert_eq!(reading.summary, "Today's reading: Al-Baqarah 2:1–30 (30 verses)");
        assert_eq!(reading.end, Pointer::new(2, 30));
        assert_eq!(reading.next, Pointer::new(2, 31));
    }

    #[test]
    fn test_daily_reading_cross_surah() {
        let table = shipped_table();
        let reading = compute_daily_reading(Pointer::new(2, 280), 30, &table).unwrap();
        assert_eq!(
            reading.summary,
            "Today's reading: Al-Baqarah 2:280 → Ali 'Imran 3:23 (30 verses)"
        );
        assert_eq!(reading.end, Pointer::new(3, 23));
        assert_eq!(reading.next, Pointer::new(3, 24));
    }

    #[test]
    fn test_daily_reading_single_verse() {
        let table = shipped_table();
        let reading = compute_daily_reading(Pointer::new(2, 5), 1, &table).unwrap();
        assert_eq!(reading.summary, "Today's reading: Al-Baqarah 2:5 (1 verse)");
        assert_eq!(reading.start, reading.end);
        assert_eq!(reading.next, Pointer::new(2, 6));
    }

    #[test]
    fn test_daily_reading_wraps_cycle() {
        let table = shipped_table();
        let reading = compute_daily_reading(Pointer::new(114, 3), 30, &table).unwrap();
        assert_eq!(reading.summary, "Today's reading: An-Nas 114:3 → Al-Baqarah 2:26 (30 verses)");
        assert_eq!(reading.next, Pointer::new(2, 27));
    }

    #[test]
    fn test_daily_reading_normalizes_start() {
        let table = shipped_table();
        let reading = compute_daily_reading(Pointer::new(2, 287), 2, &table).unwrap();
        assert_eq!(reading.start, Pointer::new(3, 1));
        assert_eq!(reading.summary, "Today's reading: Ali 'Imran 3:1–2 (2 verses)");
    }

    #[test]
    fn test_daily_reading_longer_than_cycle() {
        let table = shipped_table();
        let count = table.cycle_total() as u32 + 1;
        let reading = compute_daily_reading(Pointer::new(2, 10), count, &table).unwrap();
        assert_eq!(reading.start, reading.end);
        assert_eq!(
            reading.summary,
            format!("Today's reading: Al-Baqarah 2:10 → Al-Baqarah 2:10 ({} verses)", count)
        );
        assert_eq!(reading.next, Pointer::new(2, 11));

        let reading = compute_daily_reading(Pointer::new(2, 10), count + 4, &table).unwrap();
        assert_eq!(reading.end, Pointer::new(2, 14));
        assert!(reading.summary.contains("2:10 → Al-Baqarah 2:14"));
    }

    #[test]
    fn test_daily_reading_zero_count() {
        let table = shipped_table();
        let err = compute_daily_reading(Pointer::start(), 0, &table).unwrap_err();
        assert!(matches!(err, DailyReadError::InvalidCount(0)));
    }

    proptest! {
        #[test]
        fn prop_advance_stays_in_cycle(surah in 0u32..130, ayah in 0u32..400, steps in 0u32..20_000) {
            let table = shipped_table();
            let p = advance(surah, ayah, steps, &table).unwrap();
            prop_assert!((FIRST_SURAH..=LAST_SURAH).contains(&p.surah));
            prop_assert!(p.ayah >= 1);
            prop_assert!(p.ayah <= table.ayah_count(p.surah).unwrap());
        }

        #[test]
        fn prop_normalize_idempotent(surah in 0u32..130, ayah in 0u32..2_000) {
            let table = shipped_table();
            let once = normalize(surah, ayah, &table).unwrap();
            let twice = normalize(once.surah, once.ayah, &table).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_advance_composes(surah in 2u32..=114, ayah in 1u32..7, a in 0u32..3_000, b in 0u32..3_000) {
            let table = shipped_table();
            let stepwise = advance(surah, ayah, a, &table).unwrap();
            let stepwise = advance(stepwise.surah, stepwise.ayah, b, &table).unwrap();
            prop_assert_eq!(stepwise, advance(surah, ayah, a + b, &table).unwrap());
        }
    }
}
