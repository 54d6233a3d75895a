use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, VecBackend};
use crate::utils::text;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 19, tags = ["dp", "strings"])]
pub struct Solver;

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<u8, usize>,
    terminal: bool,
}

/// Prefix tree of the available towel patterns
#[derive(Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    fn new<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Self {
        let mut trie = Trie {
            nodes: vec![TrieNode::default()],
        };
        for pattern in patterns {
            let mut node = 0;
            for &stripe in pattern.as_bytes() {
                node = match trie.nodes[node].children.get(&stripe) {
                    Some(&child) => child,
                    None => {
                        trie.nodes.push(TrieNode::default());
                        let child = trie.nodes.len() - 1;
                        trie.nodes[node].children.insert(stripe, child);
                        child
                    }
                };
            }
            trie.nodes[node].terminal = true;
        }
        trie
    }

    /// Lengths of the patterns that `text` starts with, shortest first
    fn prefix_lengths(&self, text: &[u8]) -> Vec<usize> {
        let mut lengths = Vec::new();
        let mut node = 0;
        for (i, stripe) in text.iter().enumerate() {
            match self.nodes[node].children.get(stripe) {
                Some(&child) => node = child,
                None => break,
            }
            if self.nodes[node].terminal {
                lengths.push(i + 1);
            }
        }
        lengths
    }

    /// Ways to assemble `design` from patterns, each usable any number of times
    fn arrangements(&self, design: &str) -> Option<u64> {
        let design = design.as_bytes();
        // Keyed by suffix offset
        let ways = DpCache::new(
            VecBackend::with_capacity(design.len() + 1),
            |&offset: &usize| {
                self.prefix_lengths(&design[offset..])
                    .into_iter()
                    .map(|len| offset + len)
                    .collect()
            },
            |&offset: &usize, deps: Vec<u64>| {
                if offset == design.len() {
                    1
                } else {
                    deps.iter().sum()
                }
            },
        );
        ways.get(&0)
    }
}

#[derive(Debug)]
pub struct Onsen<'a> {
    towels: Trie,
    designs: Vec<&'a str>,
    /// Arrangement count per design, computed once for both parts
    counts: Option<Vec<u64>>,
}

impl Onsen<'_> {
    fn counts(&mut self) -> Result<&[u64], SolveError> {
        if self.counts.is_none() {
            let counts = self
                .designs
                .iter()
                .map(|design| {
                    self.towels
                        .arrangements(design)
                        .ok_or_else(|| SolveError::failed(format!("cannot count {design}")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            self.counts = Some(counts);
        }
        Ok(self.counts.as_deref().unwrap_or_default())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Onsen<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let sections = text::sections(input);
        let &[patterns, designs] = sections.as_slice() else {
            return Err(ParseError::MissingData(
                "expected towel patterns and designs separated by a blank line".into(),
            ));
        };
        let patterns = patterns.split(',').map(str::trim).filter(|p| !p.is_empty());
        Ok(Onsen {
            towels: Trie::new(patterns),
            designs: text::lines(designs).collect(),
            counts: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let possible = shared.counts()?.iter().filter(|&&ways| ways > 0).count();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.counts()?.iter().sum();
        Ok(total.to_string())
    }
}
