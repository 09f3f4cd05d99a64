use clap::Parser;
use corpus_rank::{
    crawl,
    page_rank::{iterated, sampled, PageRank, PageRankResult},
};
use log::{info, LevelFilter};
use std::path::PathBuf;

/// Rank the pages of an HTML corpus with PageRank.
#[derive(Parser, Debug)]
#[command(name = "corpus-rank", version)]
struct Args {
    /// Directory holding the `*.html` pages
    corpus: PathBuf,

    /// Probability of following a link instead of jumping to a random page
    #[arg(long, default_value_t = 0.85)]
    damping: f64,

    /// Number of pages visited by the random surfer
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    /// Iteration stops once no rank changes by this much
    #[arg(long, default_value_t = 0.001)]
    epsilon: f64,

    #[arg(long, default_value_t = 10_000)]
    max_iterations: usize,

    /// Seed for a reproducible random surfer
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_env("RUST_LOG")
        .init();

    let args = Args::parse();
    info!("{args:#?}");
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> corpus_rank::Result<()> {
    let graph = crawl(&args.corpus)?;
    info!("{} pages, {} links", graph.len(), graph.link_count());

    let cfg = sampled::Config {
        damping: args.damping,
        samples: args.samples,
        seed: args.seed,
    };
    let ranks = sampled::SampledPageRank::new(&graph, &cfg)?.calc()?;
    println!("PageRank Results from Sampling (n = {})", args.samples);
    print!("{}", ranks.page_rank().display());

    let cfg = iterated::Config {
        damping: args.damping,
        epsilon: args.epsilon,
        max_iterations: args.max_iterations,
    };
    let ranks = iterated::IteratedPageRank::new(&graph, &cfg)?.calc()?;
    info!("iteration converged after {} rounds", ranks.iterations);
    println!("PageRank Results from Iteration");
    print!("{}", ranks.page_rank().display());
    Ok(())
}
