use crate::bipartite_graph::BipartiteGraph;
use crate::pairing::Pairing;
use crate::visits::Visits;
use log::{debug, trace};

/// Computes a maximum matching of a bipartite graph with augmenting paths.
///
/// The matcher repeats rounds until a round pairs nobody. In each round, every researcher that
/// is still unpaired tries to find an augmenting path: first it takes the first free bug among
/// its neighbors, otherwise it tries to move the holder of one of its bugs (in adjacency order)
/// to a different bug. Every researcher is explored at most once per round.
///
/// The depth-first search runs on an explicit stack, so long alternating chains do not depend
/// on the size of the thread stack.
pub struct Matcher<'a> {
    g: &'a BipartiteGraph,
    pairing: Pairing,
    visits: Visits,
    stack: Vec<(usize, usize)>, // (researcher, position of the bug it is trying to take over)
}

impl<'a> Matcher<'a> {
    pub fn new(g: &'a BipartiteGraph) -> Matcher<'a> {
        Matcher {
            g,
            pairing: Pairing::new(g.n_left(), g.n_right()),
            visits: Visits::new(g.n_left()),
            stack: Vec::new(),
        }
    }

    pub fn pairing(&self) -> &Pairing {
        &self.pairing
    }

    fn free_neighbor(&self, l: usize) -> Option<usize> {
        self.g
            .neighbors(l)
            .iter()
            .cloned()
            .find(|&r| !self.pairing.is_right_paired(r))
    }

    /// Tries to pair researcher `l`, rerouting other pairs if needed.
    /// Returns whether an augmenting path was found in the current round.
    pub fn try_augment(&mut self, l: usize) -> bool {
        let g = self.g;
        self.visits.visit(l);
        if let Some(r) = self.free_neighbor(l) {
            trace!("researcher {} takes free bug {}", l, r);
            self.pairing.pair(l, r);
            return true;
        }
        self.stack.clear();
        self.stack.push((l, 0));
        while let Some(&(u, pos)) = self.stack.last() {
            let adj = g.neighbors(u);
            if pos == adj.len() {
                // u cannot be moved in this round
                self.stack.pop();
                if let Some(top) = self.stack.last_mut() {
                    top.1 += 1;
                }
                continue;
            }
            match self.pairing.left_partner_of(adj[pos]) {
                Some(holder) if !self.visits.is_visited(holder) => {
                    self.visits.visit(holder);
                    if let Some(r) = self.free_neighbor(holder) {
                        trace!("researcher {} moves to free bug {}", holder, r);
                        self.pairing.pair(holder, r);
                        self.unwind();
                        return true;
                    }
                    self.stack.push((holder, 0));
                }
                Some(_) => {
                    if let Some(top) = self.stack.last_mut() {
                        top.1 += 1;
                    }
                }
                None => {
                    // free bug, cannot happen after the direct pass
                    self.unwind();
                    return true;
                }
            }
        }
        false
    }

    /// Hands every bug on the stack to the researcher that asked for it, innermost first.
    fn unwind(&mut self) {
        let g = self.g;
        while let Some((u, pos)) = self.stack.pop() {
            let r = g.neighbors(u)[pos];
            trace!("researcher {} takes over bug {}", u, r);
            self.pairing.pair(u, r);
        }
    }

    /// Runs one round over all unpaired researchers. Returns the number of new pairs.
    pub fn augment_round(&mut self) -> usize {
        let n_left = self.g.n_left();
        self.visits.reset(n_left);
        let mut gained = 0;
        for l in 0..n_left {
            if !self.pairing.is_left_paired(l) && self.try_augment(l) {
                gained += 1;
            }
        }
        gained
    }

    /// Repeats rounds until no augmenting path is left and returns the final pairing.
    pub fn solve(mut self) -> Pairing {
        let mut rounds = 0;
        loop {
            let gained = self.augment_round();
            rounds += 1;
            debug!("round {}: {} new pairs, {} in total", rounds, gained, self.pairing.size());
            if gained == 0 {
                break;
            }
        }
        self.pairing
    }
}

/// Size of a maximum matching of `g`.
pub fn maximum_matching(g: &BipartiteGraph) -> usize {
    Matcher::new(g).solve().size()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn graph(n_left: usize, n_right: usize, edges: &[(usize, usize)]) -> BipartiteGraph {
        // edges are 1-indexed, as in the input files
        BipartiteGraph::from_edges(n_left, n_right, edges.iter().map(|&(l, r)| (l - 1, r - 1)))
            .unwrap()
    }

    fn random_graph(rng: &mut StdRng, n_left: usize, n_right: usize, p: f64) -> BipartiteGraph {
        let edges: Vec<(usize, usize)> = iproduct!(0..n_left, 0..n_right)
            .filter(|_| rng.gen_bool(p))
            .collect();
        BipartiteGraph::from_edges(n_left, n_right, edges).unwrap()
    }

    fn assert_valid(g: &BipartiteGraph, p: &Pairing) {
        let mut bugs = vec![false; g.n_right()];
        for (l, r) in p.pairs() {
            assert!(g.neighbors(l).contains(&r), "({}, {}) is not an experiment", l, r);
            assert_eq!(p.left_partner_of(r), Some(l));
            assert!(!bugs[r], "bug {} paired twice", r);
            bugs[r] = true;
        }
        assert_eq!(p.pairs().count(), p.size());
        assert!(p.size() <= g.n_left().min(g.n_right()));
    }

    // exhaustive search, only for tiny graphs
    fn brute_force(g: &BipartiteGraph, l: usize, used: &mut Vec<bool>) -> usize {
        if l == g.n_left() {
            return 0;
        }
        let mut best = brute_force(g, l + 1, used);
        for &r in g.neighbors(l) {
            if !used[r] {
                used[r] = true;
                best = best.max(1 + brute_force(g, l + 1, used));
                used[r] = false;
            }
        }
        best
    }

    #[test]
    fn test_scenarios() {
        let g = graph(3, 3, &[(1, 1), (1, 2), (2, 1), (3, 2), (3, 3)]);
        assert_eq!(maximum_matching(&g), 3);
        let g = graph(2, 1, &[(1, 1), (2, 1)]);
        assert_eq!(maximum_matching(&g), 1);
        let g = graph(4, 4, &[(1, 1), (2, 2)]);
        assert_eq!(maximum_matching(&g), 2);
    }

    #[test]
    fn test_reroute_pairing() {
        let g = graph(3, 3, &[(1, 1), (1, 2), (2, 1), (3, 2), (3, 3)]);
        let p = Matcher::new(&g).solve();
        assert_valid(&g, &p);
        // 1 takes bug 1, 2 moves 1 over to bug 2, 3 takes the free bug 3
        assert_eq!(p.pairs().collect::<Vec<_>>(), vec![(0, 1), (1, 0), (2, 2)]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(maximum_matching(&graph(0, 0, &[])), 0);
        assert_eq!(maximum_matching(&graph(0, 5, &[])), 0);
        assert_eq!(maximum_matching(&graph(5, 0, &[])), 0);
        assert_eq!(maximum_matching(&graph(4, 4, &[])), 0);
    }

    #[test]
    fn test_complete() {
        for (n_left, n_right) in iproduct!(1..6, 1..6) {
            let g = BipartiteGraph::from_edges(n_left, n_right, iproduct!(0..n_left, 0..n_right))
                .unwrap();
            assert_eq!(maximum_matching(&g), n_left.min(n_right));
        }
    }

    #[test]
    fn test_duplicates() {
        let g = graph(2, 2, &[(1, 1), (1, 1), (2, 1), (2, 1), (2, 2)]);
        assert_eq!(maximum_matching(&g), 2);
    }

    #[test]
    fn test_long_chain() {
        // researcher i < n-1 knows bugs i and i+1, the last one only knows bug 0:
        // the final augmenting path runs through every researcher.
        let n = 100_000;
        let edges = (0..n - 1)
            .flat_map(|i| vec![(i, i), (i, i + 1)])
            .chain(std::iter::once((n - 1, 0)));
        let g = BipartiteGraph::from_edges(n, n, edges).unwrap();
        let p = Matcher::new(&g).solve();
        assert_eq!(p.size(), n);
        assert_eq!(p.right_partner_of(n - 1), Some(0));
        assert_eq!(p.right_partner_of(0), Some(1));
    }

    #[test]
    fn test_rounds_are_monotone_and_maximal() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let g = random_graph(&mut rng, 30, 25, 0.08);
            let mut m = Matcher::new(&g);
            let mut size = 0;
            loop {
                let gained = m.augment_round();
                assert_eq!(m.pairing().size(), size + gained);
                size += gained;
                if gained == 0 {
                    break;
                }
            }
            assert_eq!(m.augment_round(), 0);
            assert_valid(&g, m.pairing());
        }
    }

    #[test]
    fn test_against_brute_force() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let n_left = rng.gen_range(0..7);
            let n_right = rng.gen_range(0..7);
            let g = random_graph(&mut rng, n_left, n_right, 0.3);
            let p = Matcher::new(&g).solve();
            assert_valid(&g, &p);
            assert_eq!(p.size(), brute_force(&g, 0, &mut vec![false; n_right]));
        }
    }

    #[test]
    fn test_deterministic() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = random_graph(&mut rng, 40, 40, 0.05);
        assert_eq!(Matcher::new(&g).solve(), Matcher::new(&g).solve());
    }
}
