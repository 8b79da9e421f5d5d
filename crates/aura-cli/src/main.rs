//! CLI frontend for the Aura status-effect engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "aura",
    about = "Aura — check, list, and simulate status-effect data",
    version,
    propagate_version = true
)]
struct Cli {
    /// Map an authoring alias onto an attribute (e.g. AttackSpeed=Luck)
    #[arg(long = "alias", value_name = "NAME=STAT", global = true)]
    aliases: Vec<String>,

    /// Accept stat names in any case
    #[arg(long, global = true)]
    ignore_case: bool,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an effect file and report problems
    Check {
        /// JSON file containing an array of effect definitions
        file: PathBuf,
    },

    /// List the effects defined in a file
    List {
        /// JSON file containing an array of effect definitions
        file: PathBuf,
    },

    /// Apply, tick, and remove one effect on a sample actor
    Simulate {
        /// JSON file containing an array of effect definitions
        file: PathBuf,

        /// Id of the effect to simulate
        #[arg(short, long)]
        effect: String,

        /// Number of ticks (default: until the duration elapses, 10 for permanent effects)
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Time advanced per tick
        #[arg(long, default_value = "1.0")]
        dt: f64,

        /// Starting attribute value (e.g. Strength=12); unset attributes start at 10
        #[arg(long = "set", value_name = "STAT=VALUE")]
        stats: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = commands::factory_from_args(&cli.aliases, cli.ignore_case).and_then(|factory| {
        match cli.command {
            Commands::Check { file } => commands::check::run(&file, &factory),
            Commands::List { file } => commands::list::run(&file, &factory),
            Commands::Simulate {
                file,
                effect,
                ticks,
                dt,
                stats,
            } => commands::simulate::run(&file, &factory, &effect, ticks, dt, &stats),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
