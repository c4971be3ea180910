use anyhow::Result;
use tracing::{info, warn};

use alarm_seeder::{config, logging, runner, steps, summary};
use persistence::repositories::SchemaRepository;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    logging::init_logging(&config.logging);

    info!("Starting alarm database seeder v{}", env!("CARGO_PKG_VERSION"));

    // Create database pool
    let pool = persistence::db::create_pool(&config.database_config()).await?;

    // The base schema belongs to the application's migration system; a
    // missing table here means the seeder is pointed at the wrong database.
    let missing = SchemaRepository::new(pool.clone())
        .missing_base_tables()
        .await?;
    if !missing.is_empty() {
        warn!(?missing, "base tables are missing; affected steps will fail");
    }

    let mut ctx = runner::SeedContext::new(
        config.seed.device_floor,
        config.seed.account_scan_limit,
        config.seed.rng_seed,
    );

    let failures = runner::run_steps(&steps::all(), &pool, &mut ctx).await;

    summary::report(&pool).await?;

    if failures > 0 {
        warn!(failures, "seeding finished with failed steps");
    } else {
        info!("seeding finished");
    }

    Ok(())
}
