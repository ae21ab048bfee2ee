use crate::response::ResponseWriter;

/// Read-only access to the parameters a router captured for a match.
pub trait Params {
    fn get(&self, name: &str) -> Option<&str>;
}

/// The work done once a route matched.
///
/// Neither variant allocates or does any work beyond reading a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handler {
    #[default]
    Noop,
    /// Writes the value of the named parameter to the response.
    Echo(&'static str),
}

impl Handler {
    pub fn call<P: Params + ?Sized>(self, params: &P, w: &mut dyn ResponseWriter) {
        match self {
            Handler::Noop => {}
            Handler::Echo(name) => {
                if let Some(value) = params.get(name) {
                    w.write_str(value);
                }
            }
        }
    }

    pub fn needs_params(self) -> bool {
        !matches!(self, Handler::Noop)
    }
}

impl Params for [(&str, &str)] {
    fn get(&self, name: &str) -> Option<&str> {
        self.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
    }
}

impl Params for matchit::Params<'_, '_> {
    fn get(&self, name: &str) -> Option<&str> {
        matchit::Params::get(self, name)
    }
}

impl Params for route_recognizer::Params {
    fn get(&self, name: &str) -> Option<&str> {
        self.find(name)
    }
}

impl Params for routefinder::Captures<'_, '_> {
    fn get(&self, name: &str) -> Option<&str> {
        routefinder::Captures::get(self, name)
    }
}

impl<T: actix_router::ResourcePath> Params for actix_router::Path<T> {
    fn get(&self, name: &str) -> Option<&str> {
        actix_router::Path::get(self, name)
    }
}

impl Params for regex::Captures<'_> {
    fn get(&self, name: &str) -> Option<&str> {
        self.name(name).map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::ResponseRecorder;

    #[test]
    fn noop_writes_nothing() {
        let mut w = ResponseRecorder::new();
        let params: &[(&str, &str)] = &[("name", "gordon")];
        Handler::Noop.call(params, &mut w);
        assert!(w.body().is_empty());
    }

    #[test]
    fn echo_writes_named_param() {
        let mut w = ResponseRecorder::new();
        let params: &[(&str, &str)] = &[("id", "1"), ("name", "gordon")];
        Handler::Echo("name").call(params, &mut w);
        assert_eq!(w.body_str(), Some("gordon"));
    }

    #[test]
    fn echo_of_missing_param_is_empty() {
        let mut w = ResponseRecorder::new();
        let params: &[(&str, &str)] = &[];
        Handler::Echo("name").call(params, &mut w);
        assert!(w.body().is_empty());
    }
}
