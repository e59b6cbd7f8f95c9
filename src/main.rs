use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a single capture file
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Analyze many capture files in parallel
    Batch(cmd::batch::BatchArgs),
    /// Print the threshold tables
    Profiles(cmd::profiles::ProfilesArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args),
        Commands::Batch(args) => cmd::batch::run(args),
        Commands::Profiles(args) => {
            cmd::profiles::run(args);
            Ok(())
        }
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
