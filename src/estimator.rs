//! Monte Carlo estimation of pi by sampling the unit square.
//!
//! Points `(x, y)` are drawn uniformly from `[0, 1)²`. The fraction landing
//! under the quarter circle `y = sqrt(1 - x²)` approaches `pi / 4`, so
//!
//! ```text
//!     pi ≈ 4 * inside / total
//! ```
//!
//! The generator is always handed in by the caller. Nothing here owns a
//! global random state, so a fixed or seeded source gives reproducible runs.

use std::f64::consts::PI;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Requested number of sample points.
///
/// Zero is a sentinel meaning "as many points as a `u64` can count".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleCount {
    Exactly(u64),
    Maximum,
}

impl SampleCount {
    pub fn from_requested(requested: u64) -> Self {
        if requested == 0 {
            SampleCount::Maximum
        } else {
            SampleCount::Exactly(requested)
        }
    }

    /// Total number of points to draw. Never zero.
    pub fn resolve(self) -> u64 {
        match self {
            SampleCount::Exactly(n) => n,
            SampleCount::Maximum => u64::MAX,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub total: u64,
    pub inside: u64,
    pub value: f64,
    pub error: f64,
}

impl Estimate {
    /// Builds the estimate from final counts. `total` must be non-zero.
    pub fn from_counts(total: u64, inside: u64) -> Self {
        debug_assert!(total > 0);
        debug_assert!(inside <= total);

        let value = 4.0 * inside as f64 / total as f64;
        Estimate {
            total,
            inside,
            value,
            error: (value - PI).abs(),
        }
    }
}

/// Upper boundary of the unit circle at `x`, or zero outside `[-1, 1]`.
#[inline]
pub fn quarter_circle(x: f64) -> f64 {
    if x.abs() <= 1.0 {
        (1.0 - x * x).max(0.0).sqrt()
    } else {
        0.0
    }
}

/// True if `(x, y)` lies on or under the quarter circle.
#[inline]
pub fn classify(x: f64, y: f64) -> bool {
    y <= quarter_circle(x)
}

/// Draws `samples` points from `rng` and returns how many fell inside.
pub fn count_inside<R: Rng + ?Sized>(rng: &mut R, samples: u64) -> u64 {
    let mut inside = 0u64;
    for _ in 0..samples {
        let x: f64 = rng.gen();
        let y: f64 = rng.gen();
        if classify(x, y) {
            inside += 1;
        }
    }
    inside
}

/// Runs the estimator on the calling thread.
pub fn run<R: Rng + ?Sized>(rng: &mut R, count: SampleCount) -> Estimate {
    let total = count.resolve();
    debug!(total, "sampling on calling thread");

    let inside = count_inside(rng, total);
    let estimate = Estimate::from_counts(total, inside);

    info!(
        total,
        inside,
        value = estimate.value,
        error = estimate.error,
        "estimate complete"
    );
    estimate
}

/// Wall-clock milliseconds since the Unix epoch, so separate invocations
/// start from different streams.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    /// Returns the same 64-bit word forever, so every `gen::<f64>()` yields
    /// the same coordinate.
    struct Constant(u64);

    impl Constant {
        /// `rand` maps the top 53 bits of a word onto `[0, 1)`.
        fn yielding(v: f64) -> Self {
            Constant(((v * (1u64 << 53) as f64) as u64) << 11)
        }
    }

    impl RngCore for Constant {
        fn next_u32(&mut self) -> u32 {
            (self.0 >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                chunk.copy_from_slice(&self.0.to_le_bytes()[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn constant_source_yields_requested_coordinate() {
        let mut rng = Constant::yielding(0.5);
        assert_eq!(rng.gen::<f64>(), 0.5);
    }

    #[test]
    fn classify_known_points() {
        assert!(classify(0.0, 0.0));
        assert!(!classify(1.0, 1.0));
        assert!(classify(0.5, 0.5));
        assert!(!classify(0.9, 0.9));
        assert!(classify(1.0, 0.0));
    }

    #[test]
    fn classify_outside_unit_interval_uses_zero_boundary() {
        assert_eq!(quarter_circle(1.5), 0.0);
        assert_eq!(quarter_circle(-2.0), 0.0);
        assert!(!classify(1.5, 0.1));
        assert!(classify(1.5, 0.0));
    }

    #[test]
    fn zero_requests_maximum() {
        assert_eq!(SampleCount::from_requested(0), SampleCount::Maximum);
        assert_eq!(SampleCount::from_requested(0).resolve(), u64::MAX);
        assert_eq!(SampleCount::from_requested(7).resolve(), 7);
    }

    #[test]
    fn fixed_inside_point_gives_four() {
        let mut rng = Constant::yielding(0.5);
        let est = run(&mut rng, SampleCount::Exactly(1000));
        assert_eq!(est.inside, 1000);
        assert_eq!(est.value, 4.0);
        assert!((est.error - (4.0 - PI)).abs() < 1e-12);
    }

    #[test]
    fn fixed_outside_point_gives_zero() {
        let mut rng = Constant::yielding(0.9);
        let est = run(&mut rng, SampleCount::Exactly(500));
        assert_eq!(est.inside, 0);
        assert_eq!(est.value, 0.0);
        assert!((est.error - PI).abs() < 1e-12);
    }

    #[test]
    fn same_seed_same_result() {
        let a = run(&mut seeded_rng(42), SampleCount::Exactly(10_000));
        let b = run(&mut seeded_rng(42), SampleCount::Exactly(10_000));
        assert_eq!(a, b);
    }

    #[test]
    fn counts_stay_in_range() {
        for seed in 0..20 {
            for total in [1u64, 2, 17, 1000] {
                let est = run(&mut seeded_rng(seed), SampleCount::Exactly(total));
                assert!(est.inside <= est.total);
                assert!((0.0..=4.0).contains(&est.value));
            }
        }
    }
}
