use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hybrid_sort::{SortAlgorithm, algorithm_name, all_algorithms};

/// hybrid-bench command-line interface
#[derive(Parser, Debug)]
#[command(
    name = "hybrid-bench",
    version,
    about = "Generate integer datasets and time hybrid_sort on them"
)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write uniformly random integers to a file, one per line
    Generate(GenerateArgs),
    /// Count comparisons and time repeated sorts of a dataset
    Benchmark(BenchmarkArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Destination file, truncated if it exists
    #[arg(long, env = "HYBRID_BENCH_DATA", default_value = "./testData")]
    pub data: PathBuf,

    /// Number of integers to generate
    #[arg(long, default_value_t = 1024)]
    pub size: usize,

    /// Seed for the random source; a random one is chosen and logged if omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct BenchmarkArgs {
    /// File with the integers to sort, one per line
    #[arg(long, env = "HYBRID_BENCH_DATA", default_value = "./testData")]
    pub data: PathBuf,

    /// Maximum number of integers to load
    #[arg(long, default_value_t = 1024)]
    pub size: usize,

    /// Number of timed runs
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub loops: u32,

    /// Partitions with at most this many elements are insertion sorted
    #[arg(long, default_value_t = 0)]
    pub threshold: usize,

    /// Algorithm to time
    #[arg(long, default_value = "hybrid_sort", value_parser = parse_algorithm)]
    pub algorithm: SortAlgorithm,
}

fn parse_algorithm(name: &str) -> Result<SortAlgorithm, String> {
    SortAlgorithm::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = all_algorithms()
            .iter()
            .map(|&algo| algorithm_name(algo))
            .collect();
        format!("unknown algorithm {name:?}, expected one of: {}", known.join(", "))
    })
}
