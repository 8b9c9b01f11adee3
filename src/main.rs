use clap::Parser;
use tracing::debug;

use hindsight::app::{Config, PredictionService};
use hindsight::cli::output::{self, OutputConfig};
use hindsight::cli::{self, CheckCommand, Cli, Commands};
use hindsight::error::Result;

fn main() {
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    output::configure(OutputConfig::new(args.json, args.quiet));

    if let Err(e) = run(args) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<()> {
    let config = Config::load(&args.config)?;
    config.init_logging();
    debug!(config = %args.config.display(), "Configuration loaded");

    match args.command {
        Commands::Submit(submit) => {
            cli::submit::execute(&PredictionService::from_config(&config)?, &submit)
        }
        Commands::List => cli::list::execute(&PredictionService::from_config(&config)?),
        Commands::Evaluate(evaluate) => {
            cli::evaluate::execute(&PredictionService::from_config(&config)?, &evaluate)
        }
        Commands::Check(CheckCommand::Config) => cli::check::config(&config),
    }
}
