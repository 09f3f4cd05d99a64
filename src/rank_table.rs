use crate::{common::norm_1, LinkGraph};
use std::collections::BTreeMap;

/// Per-page values over a whole corpus, iterated in page order.
///
/// Used both for the estimators' results and for the transition model's
/// next-page distribution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankTable {
    ranks: BTreeMap<String, f64>,
}

/// The transition model's output has the same shape as a rank table.
pub type ProbabilityDistribution = RankTable;

impl RankTable {
    pub(crate) fn from_positions(graph: &LinkGraph, values: &[f64]) -> Self {
        debug_assert_eq!(graph.len(), values.len());
        let ranks = graph
            .pages()
            .zip(values.iter())
            .map(|(page, w)| (page.to_string(), *w))
            .collect();
        Self { ranks }
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.ranks.iter().map(|(page, w)| (page.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// L1 distance to `other`; a page missing on one side counts as 0.
    pub fn l1_distance(&self, other: &RankTable) -> f64 {
        let mut diff: BTreeMap<&str, f64> = self.iter().collect();
        for (page, w) in other.iter() {
            *diff.entry(page).or_insert(0.0) -= w;
        }
        let diff: Vec<f64> = diff.into_values().collect();
        norm_1(&diff)
    }

    /// One `  page: 0.1234` line per page.
    pub fn display(&self) -> impl std::fmt::Display + '_ {
        RankTableDisplay { table: self }
    }
}

impl FromIterator<(String, f64)> for RankTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}

struct RankTableDisplay<'a> {
    table: &'a RankTable,
}

impl std::fmt::Display for RankTableDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (page, rank) in self.table.iter() {
            writeln!(f, "  {page}: {rank:.4}")?;
        }
        Ok(())
    }
}
