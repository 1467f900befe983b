//! Marker-delimited block replacement
//!
//! A block starts at a line beginning with the start marker and runs to the next
//! line beginning with the end marker. Everything between the two is replaced.

use log::debug;
use regex::{Captures, Regex};

use crate::error::{DailyReadError, Result};

/// Replace the content between `start_marker` and `end_marker`.
///
/// Both markers must appear in `markdown` and exactly one block must match.
pub fn replace_block(markdown: &str, start_marker: &str, end_marker: &str, new_content: &str) -> Result<String> {
    if !markdown.contains(start_marker) || !markdown.contains(end_marker) {
        return Err(DailyReadError::MarkersNotFound {
            start: start_marker.to_string(),
            end: end_marker.to_string(),
        });
    }

    let pattern = format!(
        r"(?m)(^{})[\s\S]*?(^{})",
        regex::escape(start_marker),
        regex::escape(end_marker)
    );
    let re = Regex::new(&pattern).map_err(|e| DailyReadError::config("marker pattern", "", e))?;

    let count = re.find_iter(markdown).count();
    debug!("replace_block: {} matches for {}", count, start_marker);
    if count != 1 {
        return Err(DailyReadError::ReplacementCount {
            marker: start_marker.to_string(),
            count,
        });
    }

    let replaced = re.replace(markdown, |caps: &Captures| {
        format!("{}\n{}\n{}", &caps[1], new_content, &caps[2])
    });
    Ok(replaced.into_owned())
}
