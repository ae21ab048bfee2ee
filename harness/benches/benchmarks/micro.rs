//! Single-route parameter benchmarks: how much a router pays per captured
//! segment, and for handing one back to the handler.

use super::bench_request;
use criterion::Criterion;
use routebench::{fixtures::micro, BenchConfig, BenchRequest, Handler};
use tokio::runtime::Runtime;

pub fn bench(c: &mut Criterion, rt: &Runtime, config: &BenchConfig) {
    let cases = [
        ("Param", micro::PARAM, micro::PARAM_REQUEST, Handler::Noop),
        ("Param5", micro::FIVE_PARAMS, micro::FIVE_PARAMS_REQUEST, Handler::Noop),
        ("Param20", micro::TWENTY_PARAMS, micro::TWENTY_PARAMS_REQUEST, Handler::Noop),
        ("ParamWrite", micro::PARAM, micro::PARAM_REQUEST, Handler::Echo("name")),
    ];

    for (name, path, request, handler) in cases {
        let req = BenchRequest::get(request).expect("Invalid request path");
        let mut group = c.benchmark_group(name);

        for &library in config.libraries() {
            let router = match library.try_load_single("GET", path, handler) {
                Ok(router) => router,
                Err(e) => {
                    eprintln!("{}/{}: skipped, {}", name, library, e);
                    continue;
                }
            };
            bench_request(&mut group, rt, library, &*router, &req);
        }

        group.finish();
    }
}
