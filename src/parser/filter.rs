//! Line classification and deduplication
//!
//! Both passes look at line text only. Nothing here decodes a link body.

use std::collections::{BTreeMap, HashSet};

use log::debug;

use super::types::{RawLine, Scheme};

/// Counters gathered while classifying input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStats {
    /// Non-empty lines seen
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub per_scheme: BTreeMap<Scheme, usize>,
}

/// Result of [`classify`].
#[derive(Debug, Clone, Default)]
pub struct Classified {
    pub valid: Vec<RawLine>,
    /// Rejected lines with their 1-based line number
    pub invalid: Vec<(usize, String)>,
    pub stats: LineStats,
}

/// Splits raw text into candidate lines and sorts them into recognized and
/// rejected ones.
///
/// `|` counts as a line break so subscriptions that flatten their lines
/// still split correctly. Line numbers refer to that expanded text, blank
/// lines included.
pub fn classify(text: &str) -> Classified {
    let expanded = text.replace('|', "\n");
    let mut result = Classified::default();

    for (index, line) in expanded.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        result.stats.total += 1;

        match Scheme::detect(line) {
            Some(scheme) => {
                *result.stats.per_scheme.entry(scheme).or_insert(0) += 1;
                result.valid.push(RawLine::new(line_no, line));
            }
            None => {
                debug!("Line {} rejected: no recognized scheme", line_no);
                result.invalid.push((line_no, line.to_string()));
            }
        }
    }

    result.stats.valid = result.valid.len();
    result.stats.invalid = result.invalid.len();
    result
}

/// Drops exact repeats of a line, keeping the first occurrence.
///
/// Sources are concatenated in priority order (manual text, uploaded files,
/// subscription URLs) before this runs, so the surviving copy is always the
/// one from the highest-priority source.
///
/// Returns the kept lines and the number removed.
pub fn dedupe(lines: Vec<RawLine>) -> (Vec<RawLine>, usize) {
    let mut seen = HashSet::new();
    let mut removed = 0;
    let mut kept = Vec::with_capacity(lines.len());

    for line in lines {
        if seen.insert(line.text.clone()) {
            kept.push(line);
        } else {
            debug!("Line {} dropped as duplicate", line.line_no);
            removed += 1;
        }
    }

    (kept, removed)
}
