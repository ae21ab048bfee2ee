use crate::Result;
use tokio::runtime::{Builder, Runtime};

/// A single-threaded runtime.
///
/// None of the contenders routes concurrently, so every dispatch runs on one
/// thread to keep the numbers comparable.
pub fn bench_runtime() -> Result<Runtime> {
    Ok(Builder::new_current_thread().build()?)
}
