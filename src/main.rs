use bidforge::config::CostTable;
use bidforge::loader;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Cost table file (.json or .csv). Missing keys keep their defaults.
    #[arg(global = true, long = "costs")]
    cost_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a job and print the itemized bid
    Quote(cmd::quote::QuoteArgs),
    /// Show the effective cost table
    Costs(cmd::costs::CostsArgs),
    /// List recognized job types
    Jobs,
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Base table: file if given, embedded defaults otherwise.
    let mut costs = match &cli.cost_file {
        Some(path) => loader::load_cost_table(path).unwrap_or_else(|e| {
            error!("❌ {}", e);
            process::exit(1);
        }),
        None => {
            info!("Using embedded default cost table.");
            CostTable::default()
        }
    };

    // Explicit --<rate> flags win over the file.
    let cli_costs = match &cli.command {
        Commands::Quote(args) => Some((&args.costs, "quote")),
        Commands::Costs(args) => Some((&args.costs, "costs")),
        Commands::Jobs => None,
    };
    if let Some((cli_table, name)) = cli_costs {
        if let Some(sub_matches) = matches.subcommand_matches(name) {
            costs.merge_from_cli(cli_table, sub_matches);
        }
    }

    let outcome = match cli.command {
        Commands::Quote(args) => cmd::quote::run(args, costs),
        Commands::Costs(args) => cmd::costs::run(args, costs),
        Commands::Jobs => {
            reports::print_job_types();
            Ok(())
        }
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
