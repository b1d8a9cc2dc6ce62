//! Muhurta ranking command-line tool.
//!
//! Ranks auspicious dates for an event category and prints the result.
//! Intended for smoke-testing a provider binding and for ad hoc use; the
//! real consumer of the engine is a UI collaborator calling the library.
//!
//! # Usage
//!
//! ```bash
//! # Rank with the built-in deterministic provider
//! cargo run --bin muhurta-rank -- wedding 2026-08-05 1990-03-15
//!
//! # Rank against a configured worker provider
//! MUHURTA_CONFIG=muhurta.toml cargo run --bin muhurta-rank -- travel
//! ```
//!
//! # Environment Variables
//!
//! - `MUHURTA_CONFIG`: Path to a TOML engine configuration (optional)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use muhurta_engine::api::MuhurtaEngine;
use muhurta_engine::config::EngineConfig;
use muhurta_engine::models::BirthProfile;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    let category = args.get(1).map(String::as_str).unwrap_or("wedding").to_string();
    let start_date = match args.get(2) {
        Some(s) => s.parse::<NaiveDate>()?,
        None => Utc::now().date_naive(),
    };
    let birth_date = match args.get(3) {
        Some(s) => s.parse::<NaiveDate>()?,
        None => NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid literal date"),
    };

    let config = match env::var("MUHURTA_CONFIG") {
        Ok(path) => {
            info!("loading configuration from {path}");
            EngineConfig::from_file(&path)?
        }
        Err(_) => EngineConfig::default(),
    };

    let engine = MuhurtaEngine::from_config(&config)?;
    let profile = BirthProfile::new(
        birth_date,
        NaiveTime::from_hms_opt(12, 0, 0).expect("valid literal time"),
        "unspecified",
    );

    info!("ranking '{category}' candidates from {start_date}");
    let candidates = engine.rank(&profile, &category, start_date).await?;

    if candidates.is_empty() {
        println!("No candidates met the minimum score over the horizon.");
        return Ok(());
    }

    println!("{:<12} {:<9} {:>5}  {:<24} {}", "date", "slot", "score", "description", "details");
    for c in &candidates {
        println!(
            "{:<12} {:<9} {:>5}  {:<24} {} / {}",
            c.date,
            c.slot.time(),
            c.score,
            c.description,
            c.tithi,
            c.nakshatra
        );
    }
    Ok(())
}
