use bit_set::BitSet;

/// Researchers already explored in the current round.
#[derive(Debug, Clone)]
pub struct Visits {
    visited: BitSet,
}

impl Visits {
    pub fn new(n_left: usize) -> Visits {
        Visits { visited: BitSet::with_capacity(n_left) }
    }

    /// Clears all marks for a fresh round over `n_left` researchers.
    pub fn reset(&mut self, n_left: usize) {
        self.visited.clear();
        self.visited.reserve_len(n_left);
    }

    #[inline(always)]
    pub fn is_visited(&self, l: usize) -> bool {
        self.visited.contains(l)
    }

    /// Marks `l` as visited. Returns false if it already was.
    #[inline(always)]
    pub fn visit(&mut self, l: usize) -> bool {
        self.visited.insert(l)
    }
}
