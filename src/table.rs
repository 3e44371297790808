use crate::alphabet::ALPHABET_LEN;

const PAIR_CELLS: usize = ALPHABET_LEN * ALPHABET_LEN;
const TRIPLET_CELLS: usize = PAIR_CELLS * ALPHABET_LEN;

/// Letter, pair and triplet counts keyed by alphabet index.
///
/// Each total always equals the sum of its cells: every increment goes
/// through one of the `add_*` methods, which bump the cell and the total
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    letters: Box<[u64]>,
    pairs: Box<[u64]>,
    triplets: Box<[u64]>,
    total_letters: u64,
    total_pairs: u64,
    total_triplets: u64,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable {
            letters: vec![0; ALPHABET_LEN].into_boxed_slice(),
            pairs: vec![0; PAIR_CELLS].into_boxed_slice(),
            triplets: vec![0; TRIPLET_CELLS].into_boxed_slice(),
            total_letters: 0,
            total_pairs: 0,
            total_triplets: 0,
        }
    }

    pub fn add_letter(&mut self, i: usize) {
        self.letters[i] += 1;
        self.total_letters += 1;
    }

    pub fn add_pair(&mut self, i: usize, j: usize) {
        self.pairs[pair_offset(i, j)] += 1;
        self.total_pairs += 1;
    }

    pub fn add_triplet(&mut self, i: usize, j: usize, k: usize) {
        self.triplets[triplet_offset(i, j, k)] += 1;
        self.total_triplets += 1;
    }

    pub fn letter_count(&self, i: usize) -> u64 { self.letters[i] }

    pub fn pair_count(&self, i: usize, j: usize) -> u64 { self.pairs[pair_offset(i, j)] }

    pub fn triplet_count(&self, i: usize, j: usize, k: usize) -> u64 { self.triplets[triplet_offset(i, j, k)] }

    pub fn total_letters(&self) -> u64 { self.total_letters }

    pub fn total_pairs(&self) -> u64 { self.total_pairs }

    pub fn total_triplets(&self) -> u64 { self.total_triplets }

    /// All letter cells in index order.
    pub fn letter_counts(&self) -> &[u64] { &self.letters }

    /// All pair cells, row-major by (first, second).
    pub fn pair_counts(&self) -> &[u64] { &self.pairs }

    /// All triplet cells, row-major by (first, second, third).
    pub fn triplet_counts(&self) -> &[u64] { &self.triplets }
}

#[inline]
fn pair_offset(i: usize, j: usize) -> usize {
    debug_assert!(i < ALPHABET_LEN && j < ALPHABET_LEN);
    i * ALPHABET_LEN + j
}

#[inline]
fn triplet_offset(i: usize, j: usize, k: usize) -> usize {
    debug_assert!(k < ALPHABET_LEN);
    pair_offset(i, j) * ALPHABET_LEN + k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_empty() {
        let t = FrequencyTable::new();
        assert_eq!(t.total_letters(), 0);
        assert_eq!(t.total_pairs(), 0);
        assert_eq!(t.total_triplets(), 0);
        assert!(t.triplet_counts().iter().all(|&c| c == 0));
        assert_eq!(t.pair_counts().len(), 29 * 29);
        assert_eq!(t.triplet_counts().len(), 29 * 29 * 29);
    }

    #[test]
    fn test_increments_keep_totals() {
        let mut t = FrequencyTable::new();
        t.add_letter(0);
        t.add_letter(0);
        t.add_pair(0, 28);
        t.add_pair(28, 0);
        t.add_triplet(1, 2, 3);
        assert_eq!(t.letter_count(0), 2);
        assert_eq!(t.pair_count(0, 28), 1);
        assert_eq!(t.pair_count(28, 0), 1);
        assert_eq!(t.triplet_count(1, 2, 3), 1);
        assert_eq!(t.triplet_count(3, 2, 1), 0);
        assert_eq!(t.letter_counts().iter().sum::<u64>(), t.total_letters());
        assert_eq!(t.pair_counts().iter().sum::<u64>(), t.total_pairs());
        assert_eq!(t.triplet_counts().iter().sum::<u64>(), t.total_triplets());
    }

    #[test]
    fn test_last_cell_addressable() {
        let mut t = FrequencyTable::new();
        t.add_triplet(28, 28, 28);
        assert_eq!(t.triplet_counts()[29 * 29 * 29 - 1], 1);
    }
}
