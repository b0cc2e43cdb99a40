//! CLI argument definitions for `udsgpa`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logger::Level;
use uds_gpa::config::ConfigOverrides;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `scale`, `owner`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Add a course to the owner's list.
    Add {
        /// Course name
        #[arg(long)]
        name: String,
        /// Credit hours (fractional allowed, must be >= 0)
        #[arg(long, allow_negative_numbers = true)]
        credits: f64,
        /// Letter grade on the active scale (e.g., A, B+)
        #[arg(long)]
        grade: String,
        /// Optional term label (e.g., 2024/1)
        #[arg(long)]
        term: Option<String>,
    },
    /// List the owner's courses.
    List,
    /// Edit fields of an existing course.
    Update {
        /// Course id as shown by `course list`
        #[arg(value_name = "ID")]
        id: String,
        /// New course name
        #[arg(long)]
        name: Option<String>,
        /// New credit hours
        #[arg(long, allow_negative_numbers = true)]
        credits: Option<f64>,
        /// New letter grade
        #[arg(long)]
        grade: Option<String>,
        /// New term label
        #[arg(long, conflicts_with = "clear_term")]
        term: Option<String>,
        /// Remove the term label
        #[arg(long)]
        clear_term: bool,
    },
    /// Remove one course.
    Remove {
        /// Course id as shown by `course list`
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Remove every course of the owner (requires confirmation).
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage the course list.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Show GPA, CGPA and the degree classification.
    Summary,
    /// Write a summary report.
    ///
    /// Defaults to `<reports_dir>/<owner>_summary.<ext>` when no output is given.
    Report {
        /// Output file path
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,
    },
    /// Print the active grade-points table and classification cutpoints.
    Scale,
}

#[derive(Parser, Debug)]
#[command(
    name = "udsgpa",
    about = "GPA and CGPA calculator with degree classification",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Owner whose courses are read and written (defaults to config `owner`)
    #[arg(long, value_name = "OWNER")]
    pub user: Option<String>,

    /// Grading scale for this run (institutional|standard)
    #[arg(long, value_name = "SCALE")]
    pub scale: Option<String>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config course data directory
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `--user` and `--scale` become owner and scale overrides for this run only.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            scale: self.scale.clone(),
            owner: self.user.clone(),
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
