#![cfg_attr(coverage_nightly, feature(no_coverage))]
#[warn(clippy::pedantic)]
mod builder;
mod config;
mod error;
mod handler;
mod memory;
mod method_map;
mod request;
mod response;
mod route;
mod router;

pub mod contenders;
pub mod fixtures;
pub mod runtime;
pub mod telemetry;
pub mod template;

pub use crate::{
    builder::BenchConfigBuilder,
    config::BenchConfig,
    contenders::Library,
    error::Error,
    handler::{Handler, Params},
    memory::HeapProfile,
    request::BenchRequest,
    response::{MockResponseWriter, ResponseRecorder, ResponseWriter},
    route::{Contender, DynContender, Registrar},
    router::{load, load_single, try_load, try_load_single},
};
pub use routebench_types::{Method, Route};

pub type Result<T> = std::result::Result<T, Error>;
