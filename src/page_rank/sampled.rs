use super::{transition::transition_weights, *};
use crate::{common::check_damping, Error, LinkGraph, RankTable};
use rand::{
    distr::{weighted::WeightedIndex, Distribution},
    rngs::SmallRng,
    Rng, SeedableRng,
};
use std::collections::BTreeMap;

/// Random-surfer estimate of PageRank.
///
/// A single walk visits exactly `samples` pages. The first page is picked
/// uniformly, every following one is drawn from the transition model of the
/// page before it. A page's rank is the fraction of visits it received.
pub struct SampledPageRank<'a> {
    graph: &'a LinkGraph,
    samples: usize,
    seed: Option<u64>,
    transitions: Vec<WeightedIndex<f64>>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
    /// Fixed seed for a reproducible walk. `None` draws from the thread rng.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: RankTable,
    pub visits: BTreeMap<String, usize>,
}

impl<'a> SampledPageRank<'a> {
    pub fn new(g: &'a LinkGraph, config: &Config) -> crate::Result<Self> {
        check_damping(config.damping)?;
        if config.samples == 0 {
            return Err(Error::InvalidSampleCount);
        }
        if g.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let transitions = (0..g.len())
            .map(|u| {
                WeightedIndex::new(transition_weights(g, u, config.damping))
                    .map_err(|e| Error::Sampling(e.to_string()))
            })
            .collect::<crate::Result<Vec<_>>>()?;
        Ok(Self {
            graph: g,
            samples: config.samples,
            seed: config.seed,
            transitions,
        })
    }

    /// Runs the walk on a caller-provided random source.
    pub fn walk<R: Rng>(&self, rng: &mut R) -> Result {
        let n = self.graph.len();
        let mut visits = vec![0usize; n];
        let mut cur = rng.random_range(0..n);
        visits[cur] += 1;
        for _ in 1..self.samples {
            cur = self.transitions[cur].sample(rng);
            visits[cur] += 1;
        }

        let total = self.samples as f64;
        let ranks: Vec<f64> = visits.iter().map(|x| *x as f64 / total).collect();
        log::debug!("sampled {} pages over {} candidates", self.samples, n);
        Result {
            page_rank: RankTable::from_positions(self.graph, &ranks),
            visits: visits
                .into_iter()
                .enumerate()
                .map(|(pos, x)| (self.graph.page_at(pos).to_string(), x))
                .collect(),
        }
    }
}

impl PageRank for SampledPageRank<'_> {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        let res = if let Some(seed) = self.seed {
            self.walk(&mut SmallRng::seed_from_u64(seed))
        } else {
            self.walk(&mut rand::rng())
        };
        Ok(res)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_rank::iterated::{self, IteratedPageRank};

    fn corpus() -> LinkGraph {
        LinkGraph::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ])
    }

    fn seeded(samples: usize, seed: u64) -> Config {
        Config {
            samples,
            seed: Some(seed),
            ..Config::default()
        }
    }

    #[test]
    fn single_page() {
        let g = LinkGraph::from_links([("a", Vec::<&str>::new())]);
        for n in [1, 7, 1000] {
            let res = SampledPageRank::new(&g, &seeded(n, 3407))
                .unwrap()
                .calc()
                .unwrap();
            assert_eq!(res.page_rank.get("a"), Some(1.0));
            assert_eq!(res.visits.get("a"), Some(&n));
        }
    }

    #[test]
    fn visits_exactly_n_pages() {
        let g = corpus();
        let res = SampledPageRank::new(&g, &seeded(1234, 7))
            .unwrap()
            .calc()
            .unwrap();
        assert_eq!(res.visits.values().sum::<usize>(), 1234);
        assert_eq!(res.page_rank.len(), 4);
        assert!((res.page_rank.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unvisited_pages_are_reported() {
        let g = corpus();
        let res = SampledPageRank::new(&g, &seeded(1, 11))
            .unwrap()
            .calc()
            .unwrap();
        assert_eq!(res.page_rank.len(), 4);
        assert_eq!(res.page_rank.iter().filter(|(_, w)| *w == 0.0).count(), 3);
        assert_eq!(res.page_rank.sum(), 1.0);
    }

    #[test]
    fn same_seed_same_walk() {
        let g = corpus();
        let a = SampledPageRank::new(&g, &seeded(500, 42)).unwrap();
        let b = SampledPageRank::new(&g, &seeded(500, 42)).unwrap();
        assert_eq!(a.calc().unwrap().page_rank, b.calc().unwrap().page_rank);
    }

    #[test]
    fn converges_towards_iteration() {
        let g = LinkGraph::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec![]),
            ("4.html", vec!["1.html", "3.html"]),
        ]);
        let sampled = SampledPageRank::new(&g, &seeded(10_000, 3407))
            .unwrap()
            .calc()
            .unwrap();
        let iterated = IteratedPageRank::new(&g, &iterated::Config::default())
            .unwrap()
            .calc()
            .unwrap();
        let dist = sampled.page_rank.l1_distance(&iterated.page_rank);
        assert!(dist < 0.05, "l1={dist}");
    }

    #[test]
    fn invalid_config() {
        let g = corpus();
        assert!(matches!(
            SampledPageRank::new(&g, &seeded(0, 1)),
            Err(Error::InvalidSampleCount)
        ));
        let bad_damping = Config {
            damping: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            SampledPageRank::new(&g, &bad_damping),
            Err(Error::InvalidDamping(_))
        ));
        let empty = LinkGraph::from_links(Vec::<(String, Vec<String>)>::new());
        assert!(matches!(
            SampledPageRank::new(&empty, &Config::default()),
            Err(Error::EmptyGraph)
        ));
    }
}
