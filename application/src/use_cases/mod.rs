//! Use cases

pub mod aggregate_topics;
pub mod ask_question;
pub mod export_last;
