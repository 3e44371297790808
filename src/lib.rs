pub mod alphabet;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod table;

pub use error::{Error, Result};
pub use scanner::{scan_reader, ScanSummary, StreamScanner};
pub use table::FrequencyTable;

/// Shannon entropy (bits) of a count distribution.
///
/// Empty cells are skipped rather than evaluated as `0 * log2(0)`.
/// `None` when `total` is zero: there is no distribution to measure.
pub fn shannon_entropy(counts: &[u64], total: u64) -> Option<f64> {
    if total == 0 { return None }
    let total = total as f64;
    let mut ent = 0f64;
    for &count in counts.iter().filter(|&&c| c > 0) {
        let p = (count as f64) / total;
        ent -= p * p.log2();
    }
    Some(ent)
}

/// Order-0 entropy over single letters.
pub fn entropy_order0(table: &FrequencyTable) -> Option<f64> {
    shannon_entropy(table.letter_counts(), table.total_letters())
}

/// Order-1 entropy: joint entropy of letter pairs, not next-letter-given-previous.
pub fn entropy_order1(table: &FrequencyTable) -> Option<f64> {
    shannon_entropy(table.pair_counts(), table.total_pairs())
}

/// Order-2 entropy: joint entropy of letter triplets.
pub fn entropy_order2(table: &FrequencyTable) -> Option<f64> {
    shannon_entropy(table.triplet_counts(), table.total_triplets())
}
