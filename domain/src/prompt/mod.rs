//! Prompt construction for the model client

pub mod template;

pub use template::PromptTemplate;
