pub mod bitwise;
pub mod error;
pub mod estimator;
pub mod input;
pub mod monte_carlo;
pub mod monte_carlo_async;
pub mod report;

pub use error::{Error, Result};
pub use estimator::{classify, quarter_circle, run, seeded_rng, time_seed, Estimate, SampleCount};
pub use monte_carlo::run_parallel;
pub use monte_carlo_async::run_parallel_async;
