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

/// One `matchit` radix tree per method.
#[derive(Default)]
pub struct MatchitRouter {
    trees: MethodMap<matchit::Router<Handler>>,
}

impl Registrar for MatchitRouter {
    const LIBRARY: &'static str = "Matchit";
    const PLACEHOLDER: Placeholder = Placeholder::Brace;

    type Router = Self;

    fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, method: Method, path: &str, handler: Handler) -> Result<()> {
        self.trees
            .get_or_insert_with(method, matchit::Router::new)
            .insert(path, handler)
            .map_err(|e| Error::register(Self::LIBRARY, path, e))
    }

    fn build(self) -> Result<Self> {
        Ok(self)
    }
}

#[async_trait]
impl Contender for MatchitRouter {
    async fn serve(&self, req: &BenchRequest, w: &mut dyn ResponseWriter) -> StatusCode {
        let Some(tree) = self.trees.get(req.method()) else {
            return not_found(w);
        };

        match tree.at(req.path()) {
            Ok(matched) => {
                matched.value.call(&matched.params, w);
                StatusCode::OK
            }
            Err(_) => not_found(w),
        }
    }
}
