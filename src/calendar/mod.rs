//! Calendar math: lived, remaining and total time at every granularity.

pub mod counts;
pub mod granularity;
pub mod progress;
