//! Split a roster from a file, or a made-up one, and print the raids.
use anyhow::Result;
use envconfig::Envconfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use raid_splitter::{generate_roster, partition_roster_with_plan, RosterShape, RosterSummary};

use config::{Config, OutputFormat};

mod config;
mod render;
mod roster;

fn init_logging(debug: bool) {
    // stdout carries the split itself, so logs go to stderr.
    let base_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let log_layer = if debug {
        base_layer
            .with_span_events(FmtSpan::CLOSE)
            .with_ansi(true)
            .with_filter(EnvFilter::from_default_env())
            .boxed()
    } else {
        base_layer
            .json()
            .with_filter(EnvFilter::from_default_env())
            .boxed()
    };

    tracing_subscriber::registry().with(log_layer).init();
}

fn main() -> Result<()> {
    let config = Config::init_from_env().expect("Invalid configuration:");
    init_logging(config.debug);

    let roster = match &config.roster_file {
        Some(path) => {
            tracing::info!(path = %path, "loading roster");
            roster::load(path)?
        }
        None => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let shape = RosterShape {
                size: config.roster_size,
                min_level: config.min_level,
                box_rate: config.box_rate,
                alt_rate: config.alt_rate,
            };
            tracing::info!(size = shape.size, seed = ?config.seed, "generating roster");
            generate_roster(shape, &mut rng)
        }
    };

    let summary = RosterSummary::from_attendees(&roster)?;
    let split = partition_roster_with_plan(&roster, config.raid_count, &config.group_precedence)?;
    tracing::info!(
        attendees = roster.len(),
        placed = split.entrant_count(),
        raid_count = config.raid_count,
        raid_sizes = ?split.raid_sizes(),
        plan = %config.group_precedence,
        "split roster"
    );

    match config.output {
        OutputFormat::Text => print!("{}", render::text(&summary, &split)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&split)?),
    }

    Ok(())
}
