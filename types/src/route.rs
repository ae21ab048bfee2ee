use crate::{Method, Result};

/// A method/path-template pair, the uniform input to every adapter.
///
/// Path templates use `:name` for parameters. The method is kept as text so a
/// table can carry a method outside [`Method`]; it is only parsed when the
/// route is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    method: &'static str,
    path: &'static str,
}

impl Route {
    pub const fn new(method: &'static str, path: &'static str) -> Self {
        Route { method, path }
    }

    pub fn method(&self) -> Result<Method> {
        self.method.parse()
    }

    pub fn raw_method(&self) -> &str {
        self.method
    }

    pub fn path(&self) -> &str {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn const_route() {
        const ROUTE: Route = Route::new("GET", "/people/:userId");
        assert_eq!(ROUTE.method(), Ok(Method::Get));
        assert_eq!(ROUTE.path(), "/people/:userId");
    }

    #[test]
    fn unknown_method_is_deferred() {
        let route = Route::new("FOO", "/x");
        assert_eq!(route.raw_method(), "FOO");
        assert_eq!(route.method(), Err(Error::UnknownMethod("FOO".into())));
    }
}
