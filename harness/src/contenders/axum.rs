use crate::{
    handler::{Handler, Params},
    request::BenchRequest,
    response::{ResponseRecorder, ResponseWriter},
    route::{Contender, Registrar},
    router::RouteGroups,
    template::Placeholder,
    Result,
};
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body, Bytes},
    extract::RawPathParams,
    routing::{MethodFilter, MethodRouter},
    Router,
};
use http::StatusCode;
use routebench_types::Method;
use std::convert::Infallible;
use tower::ServiceExt;

#[derive(Default)]
pub struct AxumRegistrar {
    groups: RouteGroups,
}

/// A full `axum::Router`, dispatched through its tower `Service`.
pub struct AxumRouter {
    router: Router,
}

impl Registrar for AxumRegistrar {
    const LIBRARY: &'static str = "Axum";
    const PLACEHOLDER: Placeholder = Placeholder::Colon;

    type Router = AxumRouter;

    fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, method: Method, path: &str, handler: Handler) -> Result<()> {
        self.groups.push(method, path, handler);
        Ok(())
    }

    fn build(self) -> Result<AxumRouter> {
        let mut router = Router::new();

        for (path, methods) in self.groups {
            let mut method_router: MethodRouter<(), Infallible> = MethodRouter::new();
            for (method, handler) in methods {
                let filter = method_filter(method);
                method_router = match handler {
                    Handler::Noop => method_router.on(filter, || async {}),
                    Handler::Echo(_) => method_router.on(filter, move |params: RawPathParams| async move {
                        echo(handler, &params)
                    }),
                };
            }
            router = router.route(&path, method_router);
        }

        Ok(AxumRouter { router })
    }
}

fn method_filter(method: Method) -> MethodFilter {
    match method {
        Method::Get => MethodFilter::GET,
        Method::Post => MethodFilter::POST,
        Method::Put => MethodFilter::PUT,
        Method::Patch => MethodFilter::PATCH,
        Method::Delete => MethodFilter::DELETE,
    }
}

fn echo(handler: Handler, params: &RawPathParams) -> Bytes {
    let mut body = ResponseRecorder::new();
    handler.call(params, &mut body);
    body.into_body()
}

impl Params for RawPathParams {
    fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

#[async_trait]
impl Contender for AxumRouter {
    async fn serve(&self, req: &BenchRequest, w: &mut dyn ResponseWriter) -> StatusCode {
        let response = match self.router.clone().oneshot(req.to_http(Body::empty())).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let status = response.status();
        w.write_header(status);
        if let Ok(body) = to_bytes(response.into_body(), usize::MAX).await {
            if !body.is_empty() {
                w.write(&body);
            }
        }

        status
    }
}
