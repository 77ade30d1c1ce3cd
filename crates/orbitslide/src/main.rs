mod ai;
mod app;
mod banner;
mod catalog;
mod cli;
mod commands;
mod config;
mod export;
mod model;
mod pdf;
mod presentation;
mod render;
mod state;
mod store;
mod templates;

use clap::Parser;
use colored::Colorize;

use cli::Cli;

fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.verbose, cli.quiet)),
    )
    .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = cli.run() {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}
