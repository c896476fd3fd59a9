use crate::error::Err;

/// A bipartite graph of researchers (left side) and bugs (right side).
///
/// Vertices are 0-indexed: researchers are `0..n_left`, bugs are `0..n_right`.
/// The adjacency of a researcher keeps the order in which its experiments were added,
/// which decides the tie-break of the matching engine.
#[derive(Debug, Clone, PartialEq)]
pub struct BipartiteGraph {
    n_left: usize,
    n_right: usize,
    adjs: Vec<Vec<usize>>, // bugs adjacent to researchers 0, ..., n_left-1
}

impl BipartiteGraph {
    /// Builds a graph from a list of experiments `(researcher, bug)`.
    ///
    /// Fails with `Err::InvalidGraph` if an endpoint is out of range. Repeated experiments are kept.
    pub fn from_edges<I>(n_left: usize, n_right: usize, edges: I) -> Result<BipartiteGraph, Err>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut adjs: Vec<Vec<usize>> = vec![Vec::new(); n_left];
        for (l, r) in edges {
            if l >= n_left || r >= n_right {
                return Err(Err::InvalidGraph { left: l, right: r, n_left, n_right });
            }
            adjs[l].push(r);
        }
        Ok(BipartiteGraph { n_left, n_right, adjs })
    }

    pub fn n_left(&self) -> usize {
        self.n_left
    }

    pub fn n_right(&self) -> usize {
        self.n_right
    }

    /// Number of experiments, repeated ones included.
    pub fn n_edges(&self) -> usize {
        self.adjs.iter().map(|adj| adj.len()).sum()
    }

    #[inline(always)]
    pub fn neighbors(&self, l: usize) -> &[usize] {
        &self.adjs[l]
    }
}
