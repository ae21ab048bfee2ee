use crate::{
    handler::Handler,
    method_map::MethodMap,
    request::BenchRequest,
    response::ResponseWriter,
    route::{not_found, Contender, Registrar},
    template::Placeholder,
    Error, Result,
};
use actix_router::{Path, Router, RouterBuilder};
use async_trait::async_trait;
use http::StatusCode;
use routebench_types::Method;

// `ResourceDef` panics past this many dynamic segments.
const MAX_DYNAMIC_SEGMENTS: usize = 16;

#[derive(Default)]
pub struct ActixRegistrar {
    builders: MethodMap<RouterBuilder<Handler>>,
}

/// `actix-router` resource lists, tried in registration order.
pub struct ActixRouter {
    routers: MethodMap<Router<Handler>>,
}

impl Registrar for ActixRegistrar {
    const LIBRARY: &'static str = "ActixRouter";
    const PLACEHOLDER: Placeholder = Placeholder::Brace;

    type Router = ActixRouter;

    fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, method: Method, path: &str, handler: Handler) -> Result<()> {
        let dynamic = path.split('/').filter(|segment| segment.starts_with('{')).count();
        if dynamic > MAX_DYNAMIC_SEGMENTS {
            return Err(Error::register(
                Self::LIBRARY,
                path,
                format!("more than {} dynamic segments", MAX_DYNAMIC_SEGMENTS),
            ));
        }

        self.builders
            .get_or_insert_with(method, Router::build)
            .path(path, handler);
        Ok(())
    }

    fn build(self) -> Result<ActixRouter> {
        Ok(ActixRouter {
            routers: self.builders.map(RouterBuilder::finish),
        })
    }
}

#[async_trait]
impl Contender for ActixRouter {
    async fn serve(&self, req: &BenchRequest, w: &mut dyn ResponseWriter) -> StatusCode {
        let Some(router) = self.routers.get(req.method()) else {
            return not_found(w);
        };

        let mut path = Path::new(req.path());
        match router.recognize(&mut path) {
            Some((handler, _)) => {
                let handler = *handler;
                handler.call(&path, w);
                StatusCode::OK
            }
            None => not_found(w),
        }
    }
}
