//! Events Seeder
//!
//! Fills the events collection with synthetic data for local development
//! and demos. Inserts go through the same repository the API uses, so
//! seeded documents match the stored shape exactly.

use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use database::mongodb::MongoConfig;
use domain_events::{EventService, MongoEventRepository};
use eyre::Result;
use tracing::info;

mod generator;

#[derive(Parser)]
#[command(name = "events-seeder")]
#[command(about = "Seed the events collection with synthetic data")]
struct Cli {
    /// Number of events to generate
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// Drop the events collection before seeding
    #[arg(long)]
    drop: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let cli = Cli::parse();
    let config = MongoConfig::from_env()?;

    info!("Connecting to MongoDB at {}", config.url());
    let client = database::mongodb::connect_from_config_with_retry(&config, None).await?;
    let db = client.database(config.database());

    if cli.drop {
        info!("Dropping events collection");
        db.collection::<mongodb::bson::Document>("events")
            .drop()
            .await?;
    }

    let repository = MongoEventRepository::new(&db);
    repository
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create event indexes: {}", e))?;

    let service = EventService::new(repository);

    let creates = generator::generate_events(cli.count);
    let events = service
        .create_batch(creates)
        .await
        .map_err(|e| eyre::eyre!("Seeding failed: {}", e))?;

    info!(
        count = events.len(),
        database = config.database(),
        "Seeding complete"
    );

    Ok(())
}
