pub mod iterated;
pub mod sampled;
mod traits;
pub use self::traits::*;
mod transition;
pub use self::transition::transition_model;

use crate::{LinkGraph, RankTable};

/// Random-surfer estimate over `n` visited pages.
pub fn sample_pagerank(graph: &LinkGraph, damping: f64, n: usize) -> crate::Result<RankTable> {
    let cfg = sampled::Config {
        damping,
        samples: n,
        seed: None,
    };
    let res = sampled::SampledPageRank::new(graph, &cfg)?.calc()?;
    Ok(res.into_page_rank())
}

/// Fixed-point estimate with the default threshold and iteration cap.
pub fn iterate_pagerank(graph: &LinkGraph, damping: f64) -> crate::Result<RankTable> {
    let cfg = iterated::Config {
        damping,
        ..iterated::Config::default()
    };
    let res = iterated::IteratedPageRank::new(graph, &cfg)?.calc()?;
    Ok(res.into_page_rank())
}
