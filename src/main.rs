use clap::Parser;
use esm_complete::Settings;
use esm_complete::cli::commands::{complete, exports, init};
use esm_complete::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: configuration is invalid: {e}");
            std::process::exit(2);
        }
    };

    esm_complete::logging::init_with_config(&settings.logging);

    let result = match &cli.command {
        Commands::Init { force } => init::run_init(*force),
        Commands::Config => init::run_config(&settings),
        Commands::Exports { file, json } => exports::run(file, *json),
        Commands::Complete {
            document,
            offsets,
            json,
        } => complete::run(&settings, document, offsets, *json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
