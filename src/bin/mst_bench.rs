use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::PathBuf,
};

use dotenv::dotenv;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mst_bench::batch::{input_reader::read_input, report_writer::write_report, runner::run_batch};

#[derive(StructOpt)]
struct Opts {
    /// Graph collection to process; defaults to input.json
    #[structopt(short, long)]
    input: Option<PathBuf>,

    /// Where the report is written; defaults to output.json
    #[structopt(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let opts = {
        let mut opts = Opts::from_args();
        if opts.input.is_none() {
            opts.input = std::env::var("MST_BENCH_INPUT").ok().map(PathBuf::from);
        }
        if opts.output.is_none() {
            opts.output = std::env::var("MST_BENCH_OUTPUT").ok().map(PathBuf::from);
        }
        opts
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mst_bench=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let input_path = opts.input.unwrap_or_else(|| PathBuf::from("input.json"));
    let output_path = opts.output.unwrap_or_else(|| PathBuf::from("output.json"));

    let input = read_input(BufReader::new(File::open(&input_path)?))?;
    info!("Loaded {} graphs from {}", input.graphs.len(), input_path.display());

    let report = run_batch(&input)?;

    write_report(BufWriter::new(File::create(&output_path)?), &report)?;
    info!("Results written to {}", output_path.display());

    Ok(())
}
