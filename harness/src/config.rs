use crate::{contenders::Library, fixtures::Api, route::DynContender, BenchConfigBuilder, HeapProfile};
use criterion::Criterion;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub(crate) libraries: Vec<Library>,
    pub(crate) sample_size: usize,
    pub(crate) measurement_time: Duration,
    pub(crate) warm_up_time: Duration,
    pub(crate) report_memory: bool,
    pub(crate) quiet: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            libraries: Library::ALL.to_vec(),
            sample_size: 100,
            measurement_time: Duration::from_secs(5),
            warm_up_time: Duration::from_secs(3),
            report_memory: true,
            quiet: true,
        }
    }
}

impl BenchConfig {
    pub fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::new()
    }

    pub fn libraries(&self) -> &[Library] {
        &self.libraries
    }

    pub fn report_memory(&self) -> bool {
        self.report_memory
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// A criterion instance carrying these settings. Command line arguments
    /// (the benchmark filter, baselines) are still applied by criterion.
    pub fn criterion(&self) -> Criterion {
        Criterion::default()
            .sample_size(self.sample_size)
            .measurement_time(self.measurement_time)
            .warm_up_time(self.warm_up_time)
    }

    /// Loads every enabled library with `api`'s routes.
    ///
    /// Prints the table size and, when memory reporting is on and `profile`
    /// is backed by dhat, the live heap each router holds after loading.
    /// Panics if a library rejects the table.
    pub fn contenders(&self, api: &Api, profile: &HeapProfile) -> Vec<(Library, Box<DynContender>)> {
        println!("{}", routes_header(api));

        self.libraries
            .iter()
            .map(|&library| {
                let (router, delta) = profile.measure(library.name(), || library.load(api.routes));
                if let (true, Some(bytes)) = (self.report_memory, delta) {
                    println!("   {}: {} Bytes", library, bytes);
                }
                (library, router)
            })
            .collect()
    }
}

fn routes_header(api: &Api) -> String {
    format!("#{}API Routes: {}", api.name, api.routes.len())
}
