//! Console output for the interactive session

use colored::Colorize;
use std::path::Path;

/// Formats session output for the terminal
pub struct Console;

impl Console {
    /// Welcome banner shown once the knowledge context is ready
    pub fn welcome(file_count: usize, model: &str) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│             topichat - Topic Q&A            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Loaded topics from {} file{}. Model: {}",
            file_count,
            if file_count == 1 { "" } else { "s" },
            model.bold()
        );
        println!();
    }

    /// A model answer or export text
    pub fn answer(text: &str) {
        println!();
        println!("{}", text);
        println!();
    }

    /// Status notice (empty input, nothing to export, ...)
    pub fn notice(message: &str) {
        println!("{}", message.yellow());
    }

    /// Non-fatal error; the session returns to the menu
    pub fn error(err: &dyn std::fmt::Display) {
        eprintln!("{} {}", "Error:".red().bold(), err);
    }

    /// Confirmation after a successful Export Chat
    pub fn exported(path: &Path) {
        println!("{} {}", "Chat exported to".green(), path.display());
    }

    /// Farewell on exit
    pub fn farewell() {
        println!("Bye!");
    }
}
