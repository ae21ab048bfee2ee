use crate::{
    handler::Handler, request::BenchRequest, response::ResponseWriter, template::Placeholder,
    Result,
};
use async_trait::async_trait;
use http::StatusCode;
use routebench_types::Method;
use tracing::trace;

pub type DynContender = dyn Contender;

/// A loaded router that can answer synthetic requests.
#[async_trait]
pub trait Contender: Send + Sync + 'static {
    async fn serve(&self, req: &BenchRequest, w: &mut dyn ResponseWriter) -> StatusCode;
}

/// Registration side of a router library.
///
/// Paths handed to [`Registrar::register`] are already in the library's own
/// placeholder syntax.
pub trait Registrar: Sized {
    const LIBRARY: &'static str;
    const PLACEHOLDER: Placeholder;

    type Router: Contender;

    fn new() -> Self;

    fn register(&mut self, method: Method, path: &str, handler: Handler) -> Result<()>;

    fn build(self) -> Result<Self::Router>;
}

pub(crate) fn not_found(w: &mut dyn ResponseWriter) -> StatusCode {
    trace!("No route matched");
    w.write_header(StatusCode::NOT_FOUND);
    StatusCode::NOT_FOUND
}
