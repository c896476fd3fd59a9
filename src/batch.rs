//! Reading tests, solving them and writing the solutions.
//!
//! The input starts with the number of tests. Every test consists of the number of researchers,
//! the number of bugs and the number of experiments, followed by the experiments as pairs
//! `researcher bug`. Researchers and bugs are numbered from 1 in the files. The output contains
//! the size of a maximum matching for every test, one per line.

use crate::bipartite_graph::BipartiteGraph;
use crate::error::Err;
use crate::matching::Matcher;
use crate::pairing::Pairing;
use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;
use std::error::Error;
use std::path::Path;
use std::str::SplitWhitespace;

struct Tokens<'a> {
    iter: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Tokens { iter: input.split_whitespace() }
    }

    fn next_number(&mut self, what: &'static str) -> Result<usize, Err> {
        let token = self.iter.next().ok_or(Err::UnexpectedEof { what })?;
        token.parse::<usize>().map_err(|_| Err::InvalidNumber { token: token.to_string(), what })
    }

    fn at_end(&mut self) -> bool {
        self.iter.next().is_none()
    }
}

fn parse_test(tokens: &mut Tokens) -> Result<BipartiteGraph, Err> {
    let n_left = tokens.next_number("researcher count")?;
    let n_right = tokens.next_number("bug count")?;
    let n_edges = tokens.next_number("experiment count")?;
    let mut edges = Vec::new();
    for _ in 0..n_edges {
        let l = tokens.next_number("researcher")?;
        let r = tokens.next_number("bug")?;
        if l == 0 || l > n_left || r == 0 || r > n_right {
            return Err(Err::InvalidGraph { left: l, right: r, n_left, n_right });
        }
        edges.push((l - 1, r - 1));
    }
    // repeated experiments are only added once
    BipartiteGraph::from_edges(n_left, n_right, edges.into_iter().unique())
}

/// Parses all tests of an input.
pub fn parse_tests(input: &str) -> Result<Vec<BipartiteGraph>, Err> {
    let mut tokens = Tokens::new(input);
    let n_tests = tokens.next_number("test count")?;
    let tests = (0..n_tests)
        .map(|_| parse_test(&mut tokens))
        .collect::<Result<Vec<_>, _>>()?;
    if !tokens.at_end() {
        return Err(Err::TrailingInput);
    }
    Ok(tests)
}

pub fn load_tests<P: AsRef<Path>>(path: P) -> Result<Vec<BipartiteGraph>, Box<dyn Error>> {
    let input = std::fs::read_to_string(path)?;
    let tests = parse_tests(&input)?;
    info!("loaded {} tests", tests.len());
    Ok(tests)
}

/// Solves every test and returns the final pairings in input order.
///
/// Tests are independent, so they are solved in parallel, each with its own matcher.
pub fn solve_pairings(tests: &[BipartiteGraph]) -> Vec<Pairing> {
    tests
        .par_iter()
        .enumerate()
        .map(|(i, g)| {
            let pairing = Matcher::new(g).solve();
            debug!(
                "test {}: {} researchers, {} bugs, {} experiments -> {}",
                i + 1,
                g.n_left(),
                g.n_right(),
                g.n_edges(),
                pairing.size()
            );
            pairing
        })
        .collect()
}

/// Solves every test and returns the matching sizes in input order.
pub fn solve_all(tests: &[BipartiteGraph]) -> Vec<usize> {
    solve_pairings(tests).iter().map(|p| p.size()).collect()
}

pub fn format_solutions(solutions: &[usize]) -> String {
    solutions.iter().map(|s| format!("{}\n", s)).join("")
}

pub fn write_solutions<P: AsRef<Path>>(path: P, solutions: &[usize]) -> std::io::Result<()> {
    std::fs::write(path, format_solutions(solutions))
}
