//! Progress indication for in-flight model calls

pub mod spinner;
