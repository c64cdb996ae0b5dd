//! Directory Aggregator
//!
//! Groups classified files by their exact parent directory and derives the
//! per-directory category histogram. Every ancestor of a file becomes a
//! directory entry, possibly with an empty histogram; directories with no
//! file anywhere below them cannot appear. The project root appears only
//! when it holds files directly.

use std::collections::BTreeMap;

use crate::types::utils::{ancestors, parent_dir};
use crate::types::{DirectoryHistogram, FileCategory, FileClassification};

/// Histograms keyed by directory path, sorted by path
pub fn aggregate(classifications: &[FileClassification]) -> BTreeMap<String, DirectoryHistogram> {
    let mut histograms: BTreeMap<String, DirectoryHistogram> = BTreeMap::new();

    for file in classifications {
        let parent = parent_dir(&file.path);
        histograms
            .entry(parent.to_string())
            .or_insert_with(|| DirectoryHistogram::new(parent))
            .record(file.category);

        for ancestor in ancestors(&file.path).into_iter().skip(1) {
            histograms
                .entry(ancestor.to_string())
                .or_insert_with(|| DirectoryHistogram::new(ancestor));
        }
    }

    tracing::debug!(
        "Aggregated {} files into {} directories",
        classifications.len(),
        histograms.len()
    );
    histograms
}

/// Minimum count for a category to be primary: `ceil(threshold × total)`, at least 1
pub fn primary_threshold_count(total: usize, threshold: f64) -> usize {
    ((threshold * total as f64).ceil() as usize).max(1)
}

/// Categories meeting the threshold, by count descending then declaration order
pub fn primary_categories(histogram: &DirectoryHistogram, threshold: f64) -> Vec<FileCategory> {
    if histogram.is_empty() {
        return Vec::new();
    }
    let min_count = primary_threshold_count(histogram.total, threshold);

    let mut primary: Vec<(FileCategory, usize)> = histogram
        .counts
        .iter()
        .filter(|(_, count)| **count >= min_count)
        .map(|(category, count)| (*category, *count))
        .collect();
    // BTreeMap iteration already yields declaration order; stable sort keeps it for ties
    primary.sort_by(|a, b| b.1.cmp(&a.1));
    primary.into_iter().map(|(category, _)| category).collect()
}
