use crate::{
    handler::Handler,
    route::Registrar,
    template::translate,
    Result,
};
use routebench_types::{Method, Route};
use tracing::debug;

/// Registers every route of a table with the no-op handler.
///
/// Stops at the first route whose method is outside [`Method`]; nothing after
/// it is registered.
pub fn try_load<R: Registrar>(routes: &[Route]) -> Result<R::Router> {
    let mut registrar = R::new();

    for route in routes {
        let method = route.method()?;
        let path = translate(route.path(), R::PLACEHOLDER);
        registrar.register(method, &path, Handler::Noop)?;
    }

    let router = registrar.build()?;
    debug!(library = R::LIBRARY, routes = routes.len(), "Loaded route table");

    Ok(router)
}

/// Like [`try_load`], but a bad table aborts the process.
pub fn load<R: Registrar>(routes: &[Route]) -> R::Router {
    match try_load::<R>(routes) {
        Ok(router) => router,
        Err(e) => panic!("{}", e),
    }
}

/// Registers exactly one route with the given handler.
pub fn try_load_single<R: Registrar>(method: &str, path: &str, handler: Handler) -> Result<R::Router> {
    let method: Method = method.parse()?;
    let mut registrar = R::new();
    registrar.register(method, &translate(path, R::PLACEHOLDER), handler)?;
    registrar.build()
}

pub fn load_single<R: Registrar>(method: &str, path: &str, handler: Handler) -> R::Router {
    match try_load_single::<R>(method, path, handler) {
        Ok(router) => router,
        Err(e) => panic!("{}", e),
    }
}

/// Routes collected per path, for libraries that take every method of a path
/// in a single registration. Paths keep the order they were first seen in.
#[derive(Debug, Default)]
pub(crate) struct RouteGroups {
    groups: Vec<(String, Vec<(Method, Handler)>)>,
}

impl RouteGroups {
    pub(crate) fn push(&mut self, method: Method, path: &str, handler: Handler) {
        match self.groups.iter_mut().find(|(p, _)| p.as_str() == path) {
            Some((_, methods)) => methods.push((method, handler)),
            None => self.groups.push((path.to_owned(), vec![(method, handler)])),
        }
    }
}

impl IntoIterator for RouteGroups {
    type Item = (String, Vec<(Method, Handler)>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_merge_methods_in_first_seen_order() {
        let mut groups = RouteGroups::default();
        groups.push(Method::Get, "/1/users", Handler::Noop);
        groups.push(Method::Post, "/1/login", Handler::Noop);
        groups.push(Method::Post, "/1/users", Handler::Echo("name"));

        let groups: Vec<_> = groups.into_iter().collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "/1/users");
        assert_eq!(
            groups[0].1,
            vec![(Method::Get, Handler::Noop), (Method::Post, Handler::Echo("name"))]
        );
        assert_eq!(groups[1].0, "/1/login");
    }
}
