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
use path_tree::PathTree;
use routebench_types::Method;

/// One `path-tree` radix tree per method.
#[derive(Default)]
pub struct PathTreeRouter {
    trees: MethodMap<PathTree<Handler>>,
}

impl Registrar for PathTreeRouter {
    const LIBRARY: &'static str = "PathTree";
    const PLACEHOLDER: Placeholder = Placeholder::Colon;

    type Router = Self;

    fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, method: Method, path: &str, handler: Handler) -> Result<()> {
        // Returns the route id; the tree accepts every template we hand it.
        let _ = self
            .trees
            .get_or_insert_with(method, PathTree::new)
            .insert(path, handler);
        Ok(())
    }

    fn build(self) -> Result<Self> {
        Ok(self)
    }
}

#[async_trait]
impl Contender for PathTreeRouter {
    async fn serve(&self, req: &BenchRequest, w: &mut dyn ResponseWriter) -> StatusCode {
        let Some(tree) = self.trees.get(req.method()) else {
            return not_found(w);
        };

        match tree.find(req.path()) {
            Some((handler, path)) => {
                // params() allocates, so only pay for it when the handler reads them.
                if handler.needs_params() {
                    handler.call(path.params().as_slice(), w);
                }
                StatusCode::OK
            }
            None => not_found(w),
        }
    }
}
