use crate::{contenders::Library, BenchConfig};
use std::time::Duration;

#[derive(Default)]
pub struct BenchConfigBuilder {
    config: BenchConfig,
}

impl BenchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the run to these libraries, in this order.
    #[must_use]
    pub fn with_libraries(mut self, libraries: impl IntoIterator<Item = Library>) -> Self {
        self.config.libraries = libraries.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.config.sample_size = sample_size;
        self
    }

    #[must_use]
    pub fn with_measurement_time(mut self, time: Duration) -> Self {
        self.config.measurement_time = time;
        self
    }

    #[must_use]
    pub fn with_warm_up_time(mut self, time: Duration) -> Self {
        self.config.warm_up_time = time;
        self
    }

    #[must_use]
    pub fn with_report_memory(mut self, value: bool) -> Self {
        self.config.report_memory = value;
        self
    }

    #[must_use]
    pub fn with_quiet(mut self, value: bool) -> Self {
        self.config.quiet = value;
        self
    }

    pub fn build(self) -> BenchConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_library() {
        let config = BenchConfigBuilder::new().build();
        assert_eq!(config.libraries(), Library::ALL);
        assert!(config.quiet());
        assert!(config.report_memory());
    }

    #[test]
    fn overrides() {
        let config = BenchConfig::builder()
            .with_libraries([Library::Matchit, Library::Axum])
            .with_sample_size(10)
            .with_measurement_time(Duration::from_millis(100))
            .with_warm_up_time(Duration::from_millis(10))
            .with_report_memory(false)
            .with_quiet(false)
            .build();

        assert_eq!(config.libraries(), [Library::Matchit, Library::Axum]);
        assert_eq!(config.sample_size, 10);
        assert_eq!(config.measurement_time, Duration::from_millis(100));
        assert!(!config.report_memory());
        assert!(!config.quiet());
    }
}
