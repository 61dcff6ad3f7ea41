// src/labels.rs

use prc::hash40::{set_custom_labels, Hash40};
use tracing::{debug, trace};

/// Largest value a 40-bit hash can hold.
const HASH40_MAX: u64 = 0xFF_FFFF_FFFF;

/// Parse `<hex hash>,<label>` lines.
///
/// Lines with fewer than two fields, an unparseable hash or an empty label
/// are skipped. Anything after the second field is ignored.
pub fn parse_labels(text: &str) -> Vec<(Hash40, String)> {
    let mut pairs = Vec::new();
    let mut skipped = 0usize;
    for (lineno, line) in text.lines().enumerate() {
        match parse_line(line) {
            Some(pair) => pairs.push(pair),
            None => {
                trace!(line = lineno + 1, "skipping label line");
                skipped += 1;
            }
        }
    }
    debug!(labels = pairs.len(), skipped, "parsed label csv");
    pairs
}

fn parse_line(line: &str) -> Option<(Hash40, String)> {
    let mut split = line.split(',');
    let hash_str = split.next()?.trim();
    let label = split.next()?.trim();
    if label.is_empty() || hash_str.is_empty() {
        return None;
    }
    let hash = Hash40::from_hex_str(hash_str).ok()?;
    if hash.0 > HASH40_MAX {
        return None;
    }
    Some((hash, label.to_string()))
}

/// Parse label CSV text and hand it to the param library's global label
/// table, replacing what was there. Returns the number of labels parsed.
pub fn load_labels(text: &str) -> usize {
    let pairs = parse_labels(text);
    let count = pairs.len();
    set_custom_labels(pairs.into_iter());
    count
}

/// Serializes tests that install a global table or read hash display.
#[cfg(test)]
pub(crate) static GLOBAL_TEST_GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());
