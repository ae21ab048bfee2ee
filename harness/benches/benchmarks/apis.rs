//! Whole-table benchmarks against the API fixtures.

use super::{bench_request, bench_routes};
use criterion::Criterion;
use routebench::{
    fixtures::{self, Api},
    BenchConfig, BenchRequest, DynContender, HeapProfile, Library,
};
use tokio::runtime::Runtime;

pub struct Suite {
    api: Api,
    contenders: Vec<(Library, Box<DynContender>)>,
}

pub fn load(config: &BenchConfig, profile: &HeapProfile) -> Vec<Suite> {
    fixtures::ALL
        .iter()
        .map(|api| Suite {
            api: *api,
            contenders: config.contenders(api, profile),
        })
        .collect()
}

pub fn bench(c: &mut Criterion, rt: &Runtime, suites: &[Suite]) {
    for suite in suites {
        let api = &suite.api;

        let samples = [
            ("Static", Some(api.static_path)),
            ("Param", Some(api.param_path)),
            ("2Params", api.two_params_path),
        ];

        for (kind, path) in samples {
            let Some(path) = path else { continue };
            let req = BenchRequest::get(path).expect("Invalid request path");

            let mut group = c.benchmark_group(format!("{}{}", api.name, kind));
            for (library, router) in &suite.contenders {
                bench_request(&mut group, rt, *library, &**router, &req);
            }
            group.finish();
        }

        let reqs = api
            .routes
            .iter()
            .map(BenchRequest::from_route)
            .collect::<Result<Vec<_>, _>>()
            .expect("Invalid route in table");

        let mut group = c.benchmark_group(format!("{}All", api.name));
        for (library, router) in &suite.contenders {
            bench_routes(&mut group, rt, *library, &**router, &reqs);
        }
        group.finish();
    }
}
