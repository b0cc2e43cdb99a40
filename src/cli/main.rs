//! Command-line interface entry point for `udsgpa`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use logger::{enable_debug, enable_verbose, info, init_file_logging, set_level, Level};
use uds_gpa::config::Config;

fn main() {
    let args = Cli::parse();

    // Config subcommands edit the file as stored; overrides apply to every other command
    let stored = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            let mut stored = stored;
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Course { subcommand } => {
            let (mut store, owner) = commands::open_store(&config);
            commands::course::run(subcommand, &mut store, &owner);
        }
        Command::Summary => {
            let (store, owner) = commands::open_store(&config);
            commands::summary::run(&store, &owner);
        }
        Command::Report { output, format } => {
            let (store, owner) = commands::open_store(&config);
            commands::report::run(&store, &owner, output.as_deref(), &format, &config);
        }
        Command::Scale => {
            commands::scale::run(commands::resolve_scale(&config));
        }
    }
}
