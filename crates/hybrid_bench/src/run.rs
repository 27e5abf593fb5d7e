use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use hybrid_sort::{
    CountingComparator, SortContext, SortParams, algorithm_name, ascending, sort_slice_with_ctx,
    uses_scratch,
};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::{BenchmarkArgs, GenerateArgs};
use crate::data::{load_data, random_data, save_data};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateReport {
    pub seed: u64,
    pub written: usize,
}

#[derive(Clone, Debug)]
pub struct BenchmarkReport {
    pub loaded: usize,
    pub comparisons: u64,
    pub loop_times: Vec<Duration>,
}

impl BenchmarkReport {
    pub fn mean_time(&self) -> Duration {
        if self.loop_times.is_empty() {
            return Duration::ZERO;
        }
        self.loop_times.iter().sum::<Duration>() / self.loop_times.len() as u32
    }
}

pub fn generate(args: &GenerateArgs) -> Result<GenerateReport> {
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("generating {} integers with seed {seed}", args.size);

    let mut rng = StdRng::seed_from_u64(seed);
    let data = random_data(&mut rng, args.size);

    let out = File::create(&args.data)
        .with_context(|| format!("cannot create output file {}", args.data.display()))?;
    save_data(out, &data)
        .with_context(|| format!("cannot save data to {}", args.data.display()))?;
    debug!("wrote {}", args.data.display());

    Ok(GenerateReport {
        seed,
        written: data.len(),
    })
}

pub fn benchmark(args: &BenchmarkArgs) -> Result<BenchmarkReport> {
    let input = File::open(&args.data)
        .with_context(|| format!("cannot open input file {}", args.data.display()))?;
    let data = load_data(BufReader::new(input), args.size)
        .with_context(|| format!("cannot load data from {}", args.data.display()))?;
    debug!(
        "loaded {} of at most {} integers from {}",
        data.len(),
        args.size,
        args.data.display()
    );

    let algo = args.algorithm;
    let params = SortParams {
        threshold: args.threshold,
    };
    info!(
        "benchmarking {} with input size {}, threshold {} ({} loops, scratch: {})",
        algorithm_name(algo),
        data.len(),
        params.threshold,
        args.loops,
        uses_scratch(algo)
    );
    info!("pin the CPU frequency and bind to a core for stable timings");

    // Sorting in place, so every run starts from a fresh copy of the input.
    let mut work = data.clone();
    let mut ctx = SortContext::default();

    // Counting adds work to each comparison; keep it out of the timed runs.
    let mut counter = CountingComparator::new(ascending::<i32>);
    sort_slice_with_ctx(algo, &mut work, params, &mut ctx, |a, b| {
        counter.compare(a, b)
    });
    let comparisons = counter.count();
    info!("key comparisons: {comparisons}");

    let mut loop_times = Vec::with_capacity(args.loops as usize);
    for i in 0..args.loops {
        work.copy_from_slice(&data);
        let start = Instant::now();
        sort_slice_with_ctx(algo, &mut work, params, &mut ctx, ascending);
        let elapsed = start.elapsed();
        info!("loop iteration {i}: {:.9} s", elapsed.as_secs_f64());
        loop_times.push(elapsed);
    }

    Ok(BenchmarkReport {
        loaded: data.len(),
        comparisons,
        loop_times,
    })
}
