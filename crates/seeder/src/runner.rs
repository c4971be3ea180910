//! Sequential seed-step execution.

use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Instant;
use tracing::{error, info};

use crate::error::SeedError;
use domain::services::samples::SampleGenerator;

/// Shared state threaded through the seed steps.
pub struct SeedContext {
    /// Minimum number of device rows after a run.
    pub device_floor: i64,
    /// How many accounts the group seeder walks.
    pub account_scan_limit: i64,
    /// Single source of randomness for the whole run.
    pub samples: SampleGenerator,
}

impl SeedContext {
    pub fn new(device_floor: i64, account_scan_limit: i64, rng_seed: Option<u64>) -> Self {
        let samples = match rng_seed {
            Some(seed) => SampleGenerator::from_seed(seed),
            None => SampleGenerator::from_entropy(),
        };
        Self {
            device_floor,
            account_scan_limit,
            samples,
        }
    }
}

/// One unit of seeding work with its own transaction and failure domain.
#[async_trait]
pub trait SeedStep: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, pool: &PgPool, ctx: &mut SeedContext) -> Result<(), SeedError>;
}

/// Run the steps in order. A failed step is logged and skipped; later steps
/// still run, and rows committed by earlier steps stay in place. Returns the
/// number of failed steps.
pub async fn run_steps(
    steps: &[Box<dyn SeedStep>],
    pool: &PgPool,
    ctx: &mut SeedContext,
) -> usize {
    let mut failures = 0;
    for step in steps {
        let start = Instant::now();
        match step.run(pool, ctx).await {
            Ok(()) => {
                info!(step = step.name(), elapsed = ?start.elapsed(), "step finished");
            }
            Err(e) => {
                failures += 1;
                error!(step = step.name(), error = %e, "step failed, continuing");
            }
        }
    }
    failures
}
