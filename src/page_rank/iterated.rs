use super::*;
use crate::{
    common::{check_damping, norm_inf},
    Error, LinkGraph, RankTable,
};
use std::collections::BTreeMap;

pub struct IteratedPageRank<'a> {
    graph: &'a LinkGraph,
    damping: f64,
    epsilon: f64,
    max_iterations: usize,
    transitions: BTreeMap<(usize, usize), f64>,
    dead_ends: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Iteration stops once no page moves by this much or more.
    pub epsilon: f64,
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            epsilon: 0.001,
            max_iterations: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: RankTable,
    /// Change of every page during the last iteration.
    pub delta: RankTable,
    pub iterations: usize,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(g: &'a LinkGraph, config: &Config) -> crate::Result<Self> {
        let damping = config.damping;
        check_damping(damping)?;
        let epsilon = config.epsilon;
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(Error::InvalidEpsilon(epsilon));
        }
        if g.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let mut transitions = BTreeMap::new();
        let mut dead_ends = vec![];
        for u in 0..g.len() {
            let links = g.out_positions(u);
            if links.is_empty() {
                dead_ends.push(u);
                continue;
            }
            let unit = damping / (links.len() as f64);
            for v in links {
                transitions.insert((u, v), unit);
            }
        }
        Ok(Self {
            graph: g,
            damping,
            epsilon,
            max_iterations: config.max_iterations,
            transitions,
            dead_ends,
        })
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        let n = self.graph.len();
        let jump = (1.0 - self.damping) / (n as f64);
        let mut p = vec![1.0 / (n as f64); n];
        let mut r = vec![0.0; n];
        let mut delta = vec![0.0; n];
        for iteration in 1..=self.max_iterations {
            let leaked: f64 = self.dead_ends.iter().map(|u| p[*u]).sum();
            let base = jump + self.damping * leaked / (n as f64);
            r.fill(base);
            for ((u, v), w) in self.transitions.iter() {
                r[*v] += p[*u] * w;
            }

            for ((d, a), b) in delta.iter_mut().zip(r.iter()).zip(p.iter()) {
                *d = a - b;
            }
            let max_delta = norm_inf(&delta);
            log::trace!("iteration {iteration}: max delta {max_delta}");

            if max_delta < self.epsilon {
                log::debug!("converged after {iteration} iterations");
                return Ok(Self::Result {
                    page_rank: RankTable::from_positions(self.graph, &r),
                    delta: RankTable::from_positions(self.graph, &delta),
                    iterations: iteration,
                });
            }

            std::mem::swap(&mut p, &mut r);
        }
        Err(Error::ConvergenceFailure {
            iterations: self.max_iterations,
            delta: norm_inf(&delta),
        })
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &RankTable {
        &self.page_rank
    }

    fn into_page_rank(self) -> RankTable {
        self.page_rank
    }
}
