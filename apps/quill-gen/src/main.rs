//! # Quill Generator
//!
//! Writes the deterministic blog fixture to disk and reports how many posts
//! it produced.

use anyhow::Context;
use quill_core::ports::FixtureSink;
use quill_core::{FixtureGenerator, GenerationPlan, pools};
use quill_infra::JsonFileSink;

mod config;
mod telemetry;

use config::AppConfig;
use telemetry::TelemetryConfig;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    let sink = JsonFileSink::new(&config.output_path);

    let count = run(FixtureGenerator::new(GenerationPlan::default()), &sink).inspect_err(|e| {
        tracing::error!(error = %format!("{e:#}"), "Fixture generation failed");
    })?;

    println!(
        "Successfully generated {count} enhanced blog posts to {}",
        config.output_path.display()
    );
    Ok(())
}

/// Validate the pools, generate, and hand the collection to the sink.
/// Returns the number of posts written.
fn run(generator: FixtureGenerator, sink: &dyn FixtureSink) -> anyhow::Result<usize> {
    pools::validate().context("Content pools are malformed")?;

    tracing::info!(
        post_count = generator.plan().post_count,
        anchor = %generator.plan().anchor,
        "Generating blog fixture"
    );
    let posts = generator.generate();

    sink.write(&posts).context("Failed to write fixture")?;
    Ok(posts.len())
}
