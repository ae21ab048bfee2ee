use crate::{
    handler::Handler,
    method_map::MethodMap,
    request::BenchRequest,
    response::ResponseWriter,
    route::{not_found, Contender, Registrar},
    template::Placeholder,
    Error, Result,
};
use async_trait::async_trait;
use http::StatusCode;
use routebench_types::Method;
use routefinder::Router;

/// `routefinder` ranks every candidate and returns the most specific match.
#[derive(Default)]
pub struct RoutefinderRouter {
    routers: MethodMap<Router<Handler>>,
}

impl Registrar for RoutefinderRouter {
    const LIBRARY: &'static str = "Routefinder";
    const PLACEHOLDER: Placeholder = Placeholder::Colon;

    type Router = Self;

    fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, method: Method, path: &str, handler: Handler) -> Result<()> {
        self.routers
            .get_or_insert_with(method, Router::new)
            .add(path, handler)
            .map_err(|e| Error::register(Self::LIBRARY, path, e))
    }

    fn build(self) -> Result<Self> {
        Ok(self)
    }
}

#[async_trait]
impl Contender for RoutefinderRouter {
    async fn serve(&self, req: &BenchRequest, w: &mut dyn ResponseWriter) -> StatusCode {
        let Some(router) = self.routers.get(req.method()) else {
            return not_found(w);
        };

        match router.best_match(req.path()) {
            Some(matched) => {
                let handler: Handler = *matched;
                if handler.needs_params() {
                    handler.call(&matched.captures(), w);
                }
                StatusCode::OK
            }
            None => not_found(w),
        }
    }
}
