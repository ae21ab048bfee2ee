pub mod apis;
pub mod micro;

use criterion::{measurement::WallTime, BenchmarkGroup, Throughput};
use routebench::{BenchRequest, DynContender, Library, MockResponseWriter};
use tokio::runtime::Runtime;

/// Times one request against one router.
pub fn bench_request(
    group: &mut BenchmarkGroup<'_, WallTime>,
    rt: &Runtime,
    library: Library,
    router: &DynContender,
    req: &BenchRequest,
) {
    group.throughput(Throughput::Elements(1));
    group.bench_function(library.name(), |b| {
        b.to_async(rt).iter(move || async move {
            let mut w = MockResponseWriter;
            router.serve(req, &mut w).await
        })
    });
}

/// Times a pass over every request in `reqs`.
pub fn bench_routes(
    group: &mut BenchmarkGroup<'_, WallTime>,
    rt: &Runtime,
    library: Library,
    router: &DynContender,
    reqs: &[BenchRequest],
) {
    group.throughput(Throughput::Elements(reqs.len() as u64));
    group.bench_function(library.name(), |b| {
        b.to_async(rt).iter(move || async move {
            let mut w = MockResponseWriter;
            for req in reqs {
                router.serve(req, &mut w).await;
            }
        })
    });
}
