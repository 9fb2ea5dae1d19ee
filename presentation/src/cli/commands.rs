//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for topichat
#[derive(Parser, Debug)]
#[command(name = "topichat")]
#[command(version, about = "Ask questions about issue topics exported from your documents")]
#[command(long_about = r#"
Topichat loads every topic export file from a directory, builds one
knowledge context out of them, and starts an interactive session where
a language model answers questions strictly from that data.

Session actions:
  Ask Something                - ask a question about the loaded topics
  Export last message to JSON  - let the model restructure the last exchange
  Export Chat                  - write the whole conversation to a JSON file
  Exit                         - end the session

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./topichat.toml     Project-level config
3. ~/.config/topichat/config.toml   Global config

Example:
  topichat ./exports
  topichat --model command-r-plus ./exports
"#)]
pub struct Cli {
    /// Directory containing topic export files
    pub topics_dir: PathBuf,

    /// Model used for answers (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the model-wait spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
