use clap::Parser;
use hybrid_bench::cli::{Cli, Command};
use hybrid_bench::run;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(args) => run::generate(&args).map(|report| {
            println!(
                "wrote {} integers to file {} (seed {})",
                report.written,
                args.data.display(),
                report.seed
            );
        }),
        Command::Benchmark(args) => run::benchmark(&args).map(|report| {
            println!(
                "Key comparisons: {}, Average time: {:.9} s over {} loops",
                report.comparisons,
                report.mean_time().as_secs_f64(),
                report.loop_times.len()
            );
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
