use crate::{
    handler::Handler,
    request::BenchRequest,
    response::ResponseWriter,
    route::{not_found, Contender, Registrar},
    template::Placeholder,
    Result,
};
use async_trait::async_trait;
use http::StatusCode;
use regex::{Regex, RegexSet};
use routebench_types::Method;

#[derive(Default)]
pub struct RegexRegistrar {
    patterns: Vec<String>,
    routes: Vec<(Method, Handler)>,
}

/// Every route is an anchored regular expression. All patterns are tested at
/// once and the first one, in registration order, whose method agrees wins.
pub struct RegexRouter {
    set: RegexSet,
    routes: Vec<(Method, Handler, Regex)>,
}

impl Registrar for RegexRegistrar {
    const LIBRARY: &'static str = "Regex";
    const PLACEHOLDER: Placeholder = Placeholder::Regex;

    type Router = RegexRouter;

    fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, method: Method, path: &str, handler: Handler) -> Result<()> {
        self.patterns.push(path.to_owned());
        self.routes.push((method, handler));
        Ok(())
    }

    fn build(self) -> Result<RegexRouter> {
        let set = RegexSet::new(&self.patterns)?;
        let routes = self
            .patterns
            .iter()
            .zip(self.routes)
            .map(|(pattern, (method, handler))| -> Result<_> {
                Ok((method, handler, Regex::new(pattern)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RegexRouter { set, routes })
    }
}

#[async_trait]
impl Contender for RegexRouter {
    async fn serve(&self, req: &BenchRequest, w: &mut dyn ResponseWriter) -> StatusCode {
        let Some(method) = Method::from_http(req.method()) else {
            return not_found(w);
        };

        let path = req.path();
        let matched = self
            .set
            .matches(path)
            .into_iter()
            .map(|i| &self.routes[i])
            .find(|(m, _, _)| *m == method);

        match matched {
            Some((_, handler, regex)) => {
                if handler.needs_params() {
                    if let Some(caps) = regex.captures(path) {
                        handler.call(&caps, w);
                    }
                }
                StatusCode::OK
            }
            None => not_found(w),
        }
    }
}
