//! CLI entrypoint for topichat
//!
//! This is the main binary that wires together all layers using
//! dependency injection. Aggregation errors are fatal here; once the
//! interactive session starts, every error is handled inside the loop.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use topichat_application::AggregateTopicsUseCase;
use topichat_infrastructure::{
    CohereGateway, ConfigLoader, FsTopicSource, JsonFileExporter, JsonTopicParser,
};
use topichat_presentation::{Cli, SessionRepl};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Populate the environment from a local .env file, if present
    dotenvy::dotenv().ok();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let model = cli.model.unwrap_or(config.model.name);

    info!("Starting topichat with model {}", model);

    // Build the knowledge context exactly once; any failure here exits
    // before a session starts.
    let source = Arc::new(FsTopicSource::new(&config.topics.extension));
    let parser = Arc::new(JsonTopicParser::new());
    let aggregate = AggregateTopicsUseCase::new(source, parser);
    let context = aggregate.execute(&cli.topics_dir)?;

    info!(
        "Knowledge context ready: {} sections, {} bytes",
        context.section_count(),
        context.as_str().len()
    );

    // === Dependency Injection ===
    let gateway =
        Arc::new(CohereGateway::from_env(&model).with_base_url(&config.model.base_url));
    let export_sink = Arc::new(JsonFileExporter::new(
        std::env::current_dir()?,
        &config.export.file_name,
    ));

    let mut repl = SessionRepl::new(gateway, export_sink, context, model)
        .with_spinner(!cli.quiet);
    repl.run().await;

    Ok(())
}
