mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod handlers;
mod intent;
mod output;
mod platform;
mod processor;
mod utils;

use clap::Parser;
use env_logger::Env;

use cli::Cli;
use config::{AssistantConfig, Config};
use platform::Platform;
use processor::CommandProcessor;

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path).unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        }),
        None => Config::load(),
    };
    let cli = cli.with_config(&loaded.config);

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
    loaded.report();

    let config = AssistantConfig::resolve(&cli, &loaded.config).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    let platform = Platform::desktop(&config);
    let mut processor = CommandProcessor::new(config, platform);

    if let Err(e) = app::run(&cli, &mut processor) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
