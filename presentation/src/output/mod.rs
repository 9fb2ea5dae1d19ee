//! Console output helpers

pub mod console;
