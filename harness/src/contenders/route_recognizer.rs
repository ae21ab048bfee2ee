use crate::{
    handler::Handler,
    method_map::MethodMap,
    request::BenchRequest,
    response::ResponseWriter,
    route::{not_found, Contender, Registrar},
    template::Placeholder,
    Result,
};
use async_trait::async_trait;
use http::StatusCode;
use route_recognizer::Router;
use routebench_types::Method;

#[derive(Default)]
pub struct RouteRecognizerRouter {
    routers: MethodMap<Router<Handler>>,
}

impl Registrar for RouteRecognizerRouter {
    const LIBRARY: &'static str = "RouteRecognizer";
    const PLACEHOLDER: Placeholder = Placeholder::Colon;

    type Router = Self;

    fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, method: Method, path: &str, handler: Handler) -> Result<()> {
        self.routers
            .get_or_insert_with(method, Router::new)
            .add(path, handler);
        Ok(())
    }

    fn build(self) -> Result<Self> {
        Ok(self)
    }
}

#[async_trait]
impl Contender for RouteRecognizerRouter {
    async fn serve(&self, req: &BenchRequest, w: &mut dyn ResponseWriter) -> StatusCode {
        let Some(router) = self.routers.get(req.method()) else {
            return not_found(w);
        };

        match router.recognize(req.path()) {
            Ok(matched) => {
                let handler: Handler = **matched.handler();
                handler.call(matched.params(), w);
                StatusCode::OK
            }
            Err(_) => not_found(w),
        }
    }
}
