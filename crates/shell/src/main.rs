//! CLI for graph-based permutation tests.

mod commands;
mod data;
mod rules;
mod utils;

use clap::Parser;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The random seed to use. Without one, the generator is seeded from
    /// entropy.
    #[arg(short('s'), long)]
    seed: Option<u64>,

    /// The name of the log file, written under `./logs`.
    #[arg(long, default_value = "graph-perm")]
    log_name: String,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = utils::configure_logger(&args.log_name)?;
    println!("Log file: {log_path:?}");
    ftlog::info!("{args:?}");

    match args.command {
        Commands::Test {
            inputs,
            rule,
            label,
            grouping,
            permutations,
            parallel,
            out_dir,
        } => commands::test::run(&inputs, &rule, &label, grouping, permutations, parallel, args.seed, out_dir)?,
        Commands::Graph {
            inputs,
            rule,
            label,
            out_path,
        } => commands::graph::run(&inputs, &rule, &label, &out_path)?,
    }

    Ok(())
}
