//! Interactive session loop

pub mod repl;

pub use repl::SessionRepl;
