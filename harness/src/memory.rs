//! Heap footprint of a loaded router.
//!
//! Backed by dhat when the `dhat-heap` feature is on. The binary doing the
//! measuring must install the allocator itself:
//!
//! ```ignore
//! #[cfg(feature = "dhat-heap")]
//! #[global_allocator]
//! static ALLOC: dhat::Alloc = dhat::Alloc;
//! ```
//!
//! Drop the [`HeapProfile`] before timing anything; dhat's bookkeeping is far
//! more expensive than the dispatch being measured.

use tracing::debug;

pub struct HeapProfile {
    #[cfg(feature = "dhat-heap")]
    _profiler: dhat::Profiler,
}

impl HeapProfile {
    /// Starts the profiler. Only one may run per process at a time.
    pub fn start() -> Self {
        HeapProfile {
            #[cfg(feature = "dhat-heap")]
            _profiler: dhat::Profiler::builder().testing().build(),
        }
    }

    pub fn enabled() -> bool {
        cfg!(feature = "dhat-heap")
    }

    /// Runs `load` and reports how many live heap bytes it left behind.
    ///
    /// The loaded value is returned so it stays alive past the second reading.
    pub fn measure<T>(&self, name: &str, load: impl FnOnce() -> T) -> (T, Option<u64>) {
        let before = self.live_bytes();
        let value = load();
        let after = self.live_bytes();

        let delta = before.zip(after).map(|(before, after)| after.saturating_sub(before));
        debug!(name, ?delta, "Measured heap footprint");

        (value, delta)
    }

    #[cfg(feature = "dhat-heap")]
    fn live_bytes(&self) -> Option<u64> {
        Some(dhat::HeapStats::get().curr_bytes as u64)
    }

    #[cfg(not(feature = "dhat-heap"))]
    fn live_bytes(&self) -> Option<u64> {
        None
    }
}

#[cfg(all(test, not(feature = "dhat-heap")))]
mod tests {
    use super::*;

    #[test]
    fn measure_without_profiler_still_loads() {
        let profile = HeapProfile::start();
        let (value, delta) = profile.measure("vec", || vec![0u8; 1024]);
        assert_eq!(value.len(), 1024);
        assert_eq!(delta, None);
        assert!(!HeapProfile::enabled());
    }
}
