use tokio::task;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::estimator::{count_inside, seeded_rng, Estimate, SampleCount};
use crate::monte_carlo::{worker_shares, worker_seeds};

/// Same partitioning as [`crate::monte_carlo::run_parallel`], but each share
/// runs on tokio's blocking pool. Sampling is CPU-bound, so the tasks never
/// touch the async workers.
pub async fn run_parallel_async(
    count: SampleCount,
    num_tasks: usize,
    seed: u64,
) -> Result<Estimate> {
    if num_tasks == 0 {
        return Err(Error::NoWorkers);
    }

    let total = count.resolve();
    debug!(total, num_tasks, seed, "spawning blocking sampling tasks");

    let mut handles = vec![];

    for (samples, task_seed) in worker_shares(total, num_tasks)
        .into_iter()
        .zip(worker_seeds(seed, num_tasks))
    {
        let handle = task::spawn_blocking(move || {
            let mut rng = seeded_rng(task_seed);
            count_inside(&mut rng, samples)
        });

        handles.push(handle);
    }

    let mut total_inside = 0u64;
    for (task_id, handle) in handles.into_iter().enumerate() {
        let inside = handle.await?;
        debug!(task_id, inside, "task finished");
        total_inside += inside;
    }

    let estimate = Estimate::from_counts(total, total_inside);
    info!(
        total,
        inside = total_inside,
        value = estimate.value,
        error = estimate.error,
        "async estimate complete"
    );
    Ok(estimate)
}
