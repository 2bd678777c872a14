mod config;
mod dlq;
mod domain;
mod engine;
mod ingestion;
mod output_repository;

use clap::Parser;

use crate::{
    config::Config, dlq::StdErrDLQ, engine::Engine, output_repository::StdOutOutput,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(config.log_level)
        .init();

    let ingestion = ingestion::CsvReader::open(&config.file)?;

    let mut engine = Engine::new(
        ingestion,
        StdOutOutput::new(),
        StdErrDLQ::default(),
        config.initial_state(),
    );

    if let Err(e) = engine.process().await {
        tracing::error!(%e, "aborting replay");
        return Err(e.into());
    }

    tracing::debug!(state = ?engine.state(), "replay finished");
    engine.flush();

    Ok(())
}
