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
use http::StatusCode;
use poem::{
    endpoint::{make_sync, BoxEndpoint},
    Endpoint, EndpointExt, Request, Response, Route, RouteMethod,
};
use routebench_types::Method;

#[derive(Default)]
pub struct PoemRegistrar {
    groups: RouteGroups,
}

/// A `poem::Route` tree, dispatched through its `Endpoint`.
pub struct PoemRouter {
    route: Route,
}

impl Registrar for PoemRegistrar {
    const LIBRARY: &'static str = "Poem";
    const PLACEHOLDER: Placeholder = Placeholder::Colon;

    type Router = PoemRouter;

    fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, method: Method, path: &str, handler: Handler) -> Result<()> {
        self.groups.push(method, path, handler);
        Ok(())
    }

    fn build(self) -> Result<PoemRouter> {
        let mut route = Route::new();

        for (path, methods) in self.groups {
            let mut route_method = RouteMethod::new();
            for (method, handler) in methods {
                let ep = endpoint(handler);
                route_method = match method {
                    Method::Get => route_method.get(ep),
                    Method::Post => route_method.post(ep),
                    Method::Put => route_method.put(ep),
                    Method::Patch => route_method.patch(ep),
                    Method::Delete => route_method.delete(ep),
                };
            }
            route = route.at(path, route_method);
        }

        Ok(PoemRouter { route })
    }
}

fn endpoint(handler: Handler) -> BoxEndpoint<'static, Response> {
    match handler {
        Handler::Noop => make_sync(|_: Request| ()).map_to_response().boxed(),
        Handler::Echo(_) => make_sync(move |req: Request| {
            let mut body = ResponseRecorder::new();
            handler.call(&req, &mut body);
            body.into_body()
        })
        .map_to_response()
        .boxed(),
    }
}

impl Params for Request {
    fn get(&self, name: &str) -> Option<&str> {
        self.raw_path_param(name)
    }
}

#[async_trait]
impl Contender for PoemRouter {
    async fn serve(&self, req: &BenchRequest, w: &mut dyn ResponseWriter) -> StatusCode {
        let request = Request::builder()
            .method(req.method().clone())
            .uri(req.uri().clone())
            .finish();

        let response = match self.route.call(request).await {
            Ok(response) => response,
            Err(e) => e.into_response(),
        };

        let status = response.status();
        w.write_header(status);
        if let Ok(body) = response.into_body().into_bytes().await {
            if !body.is_empty() {
                w.write(&body);
            }
        }

        status
    }
}
