mod benchmarks;

use routebench::{runtime, telemetry, BenchConfig, HeapProfile};

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn main() {
    let config = BenchConfig::default();

    if config.quiet() {
        telemetry::init_quiet().expect("Failed to silence logging");
    } else {
        telemetry::init_telemetry().expect("Failed to set subscriber");
    }

    let rt = runtime::bench_runtime().expect("Failed to build runtime");

    // Everything is loaded up front so the profiler is gone before timing.
    if !HeapProfile::enabled() {
        eprintln!("Heap usage not measured, rerun with `--features dhat-heap` to report it");
    }
    let profile = HeapProfile::start();
    let suites = benchmarks::apis::load(&config, &profile);
    drop(profile);

    let mut c = config.criterion().configure_from_args();

    benchmarks::micro::bench(&mut c, &rt, &config);
    benchmarks::apis::bench(&mut c, &rt, &suites);

    c.final_summary();
}
