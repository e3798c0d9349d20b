use std::thread;

use rand::Rng;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::estimator::{count_inside, seeded_rng, Estimate, SampleCount};

/// Splits `total` into one share per worker; the last worker also takes the
/// remainder.
pub fn worker_shares(total: u64, num_workers: usize) -> Vec<u64> {
    let workers = num_workers as u64;
    let samples_per_worker = total / workers;
    let remainder = total % workers;

    (0..workers)
        .map(|worker_id| {
            if worker_id == workers - 1 {
                samples_per_worker + remainder
            } else {
                samples_per_worker
            }
        })
        .collect()
}

/// One independent seed per worker, all derived from `seed`.
pub fn worker_seeds(seed: u64, num_workers: usize) -> Vec<u64> {
    let mut master = seeded_rng(seed);
    (0..num_workers).map(|_| master.gen()).collect()
}

/// Samples on `num_workers` OS threads. Each thread owns its generator and
/// counter; the calling thread sums the partial counts.
pub fn run_parallel(count: SampleCount, num_workers: usize, seed: u64) -> Result<Estimate> {
    if num_workers == 0 {
        return Err(Error::NoWorkers);
    }

    let total = count.resolve();
    debug!(total, num_workers, seed, "spawning sampling threads");

    let mut handles = vec![];

    for (worker_id, (samples, worker_seed)) in worker_shares(total, num_workers)
        .into_iter()
        .zip(worker_seeds(seed, num_workers))
        .enumerate()
    {
        let handle = thread::spawn(move || {
            let mut rng = seeded_rng(worker_seed);
            count_inside(&mut rng, samples)
        });

        handles.push((worker_id, handle));
    }

    let mut total_inside = 0u64;
    for (worker_id, handle) in handles {
        let inside = handle.join().map_err(|_| Error::WorkerPanicked(worker_id))?;
        debug!(worker_id, inside, "worker finished");
        total_inside += inside;
    }

    let estimate = Estimate::from_counts(total, total_inside);
    info!(
        total,
        inside = total_inside,
        value = estimate.value,
        error = estimate.error,
        "parallel estimate complete"
    );
    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_sum_to_total() {
        for (total, workers) in [(10u64, 3usize), (1, 4), (1000, 1), (7, 7), (u64::MAX, 5)] {
            let shares = worker_shares(total, workers);
            assert_eq!(shares.len(), workers);
            assert_eq!(shares.iter().map(|&s| s as u128).sum::<u128>(), total as u128);
        }
    }

    #[test]
    fn remainder_goes_to_last_worker() {
        assert_eq!(worker_shares(10, 3), vec![3, 3, 4]);
        assert_eq!(worker_shares(2, 4), vec![0, 0, 0, 2]);
    }

    #[test]
    fn seeds_are_distinct_and_reproducible() {
        let a = worker_seeds(9, 4);
        assert_eq!(a, worker_seeds(9, 4));
        assert!(a.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn zero_workers_rejected() {
        assert!(matches!(
            run_parallel(SampleCount::Exactly(10), 0, 1),
            Err(Error::NoWorkers)
        ));
    }

    #[test]
    fn parallel_is_deterministic_per_seed() {
        let a = run_parallel(SampleCount::Exactly(40_000), 4, 123).unwrap();
        let b = run_parallel(SampleCount::Exactly(40_000), 4, 123).unwrap();
        assert_eq!(a, b);
        assert!(a.inside <= a.total);
        assert_eq!(a.total, 40_000);
    }

    #[test]
    fn more_workers_than_samples() {
        let est = run_parallel(SampleCount::Exactly(3), 8, 5).unwrap();
        assert_eq!(est.total, 3);
        assert!(est.inside <= 3);
    }
}
