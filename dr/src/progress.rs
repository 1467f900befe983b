//! Progress rendering for the README reading block

/// Default bar width in cells
pub const BAR_LENGTH: usize = 10;

/// `[███░░░░░░░] 30.0% (1869/6229 verses)`
pub fn progress_bar(current: u64, total: u64, length: usize) -> String {
    let (percent, filled) = if total > 0 {
        let ratio = current as f64 / total as f64;
        (ratio * 100.0, ((ratio * length as f64) as usize).min(length))
    } else {
        (0.0, 0)
    };

    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(length - filled));
    format!("[{}] {:.1}% ({}/{} verses)", bar, percent, current, total)
}

pub fn stats_line(total_verses_read: u64, days_active: u64) -> String {
    format!(
        "📊 **Stats:** {} verses read | {} days active",
        total_verses_read, days_active
    )
}

/// Summary, bar and stats separated by blank lines
pub fn reading_block(summary: &str, progress_bar: &str, stats_line: &str) -> String {
    format!("{}\n\n{}\n\n{}", summary, progress_bar, stats_line)
}
