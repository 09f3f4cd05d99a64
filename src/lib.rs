mod common;
pub use self::common::*;
pub mod corpus;
pub use self::corpus::crawl;
mod error;
pub use self::error::{Error, Result};
mod link_graph;
pub use self::link_graph::LinkGraph;
mod rank_table;
pub use self::rank_table::{ProbabilityDistribution, RankTable};

pub mod page_rank;
pub use self::page_rank::{iterate_pagerank, sample_pagerank, transition_model};
