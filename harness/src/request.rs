use crate::Result;
use http::{Method, Uri};
use routebench_types::Route;

/// A synthetic request, built once and dispatched many times.
#[derive(Debug, Clone)]
pub struct BenchRequest {
    method: Method,
    uri: Uri,
}

impl BenchRequest {
    pub fn new(method: impl Into<Method>, path: &str) -> Result<Self> {
        Ok(BenchRequest {
            method: method.into(),
            uri: path.parse()?,
        })
    }

    pub fn get(path: &str) -> Result<Self> {
        Self::new(Method::GET, path)
    }

    /// Requests the route's own template path, so `/people/:userId` is sent
    /// with the literal segment `:userId` as the parameter value.
    pub fn from_route(route: &Route) -> Result<Self> {
        Self::new(route.method()?, route.path())
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Materialises an `http::Request` for contenders that consume one.
    pub fn to_http<B>(&self, body: B) -> http::Request<B> {
        let mut req = http::Request::new(body);
        *req.method_mut() = self.method.clone();
        *req.uri_mut() = self.uri.clone();
        req
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_route_keeps_template() {
        let req = BenchRequest::from_route(&Route::new("DELETE", "/moments/:id")).unwrap();
        assert_eq!(*req.method(), Method::DELETE);
        assert_eq!(req.path(), "/moments/:id");
    }

    #[test]
    fn from_route_rejects_unknown_method() {
        assert!(BenchRequest::from_route(&Route::new("BREW", "/pot")).is_err());
    }

    #[test]
    fn to_http_copies_method_and_uri() {
        let req = BenchRequest::new(routebench_types::Method::Post, "/1/classes/go").unwrap();
        let http = req.to_http(());
        assert_eq!(*http.method(), Method::POST);
        assert_eq!(http.uri().path(), "/1/classes/go");
    }
}
