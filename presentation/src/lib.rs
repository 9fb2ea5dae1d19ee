//! Presentation layer for topichat
//!
//! This crate contains the CLI definition, the interactive session
//! loop, console output helpers, and the model-wait spinner.

pub mod cli;
pub mod output;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::Console;
pub use progress::spinner::ModelSpinner;
pub use session::SessionRepl;
