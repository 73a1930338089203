/// Summary statistics derived from a record list.
///
/// Pure and recomputed on demand; nothing here is cached between calls.
use super::categorizer::Category;
use crate::model::FileRecord;
use std::collections::BTreeMap;

/// Length of the "largest files" list.
pub const TOP_LARGEST: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub hidden_count: usize,
    /// Files per category. Categories with no files are absent.
    pub category_counts: BTreeMap<Category, usize>,
    /// Bytes per category, same keys as `category_counts`.
    pub category_sizes: BTreeMap<Category, u64>,
    /// Largest files first; equal sizes keep their original list order.
    pub top_largest: Vec<FileRecord>,
}

/// Summarise `records` with the default top-[`TOP_LARGEST`] list.
pub fn summarize(records: &[FileRecord]) -> Summary {
    summarize_top(records, TOP_LARGEST)
}

/// Summarise `records`, keeping the `n` largest files.
pub fn summarize_top(records: &[FileRecord], n: usize) -> Summary {
    let mut summary = Summary {
        total_files: records.len(),
        ..Summary::default()
    };

    for record in records {
        summary.total_size_bytes += record.size_bytes;
        if record.is_hidden {
            summary.hidden_count += 1;
        }
        *summary.category_counts.entry(record.category).or_insert(0) += 1;
        *summary.category_sizes.entry(record.category).or_insert(0) += record.size_bytes;
    }

    // `sort_by` is stable, which keeps placeholder files of equal size in
    // scan order. Sort references, clone only the survivors.
    let mut by_size: Vec<&FileRecord> = records.iter().collect();
    by_size.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
    summary.top_largest = by_size.into_iter().take(n).cloned().collect();

    summary
}
