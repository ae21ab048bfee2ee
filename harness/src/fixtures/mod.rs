//! Route tables modelled on public REST APIs.
//!
//! The tables are immutable statics: every adapter reads them, none mutates
//! them.

pub mod github;
pub mod gplus;
pub mod parse;

use routebench_types::Route;

/// A route table plus the sample requests its benchmarks send.
#[derive(Debug, Clone, Copy)]
pub struct Api {
    pub name: &'static str,
    pub routes: &'static [Route],
    /// A path without parameters.
    pub static_path: &'static str,
    /// A path with one parameter.
    pub param_path: &'static str,
    /// A path with two parameters, if the table has a fitting route.
    pub two_params_path: Option<&'static str>,
}

pub const GPLUS: Api = Api {
    name: "GPlus",
    routes: gplus::ROUTES,
    static_path: "/people",
    param_path: "/people/118051310819094153327",
    two_params_path: Some("/people/118051310819094153327/activities/123456789"),
};

pub const PARSE: Api = Api {
    name: "Parse",
    routes: parse::ROUTES,
    static_path: "/1/users",
    param_path: "/1/classes/go",
    two_params_path: Some("/1/classes/go/123456789"),
};

pub const GITHUB: Api = Api {
    name: "GitHub",
    routes: github::ROUTES,
    static_path: "/user/repos",
    param_path: "/repos/julienschmidt/httprouter/stargazers",
    two_params_path: None,
};

pub const ALL: [Api; 3] = [GPLUS, PARSE, GITHUB];

/// Single-route templates for the parameter micro benchmarks.
pub mod micro {
    pub const PARAM: &str = "/user/:name";
    pub const PARAM_REQUEST: &str = "/user/gordon";

    pub const FIVE_PARAMS: &str = "/:a/:b/:c/:d/:e";
    pub const FIVE_PARAMS_REQUEST: &str = "/test/test/test/test/test";

    pub const TWENTY_PARAMS: &str = "/:a/:b/:c/:d/:e/:f/:g/:h/:i/:j/:k/:l/:m/:n/:o/:p/:q/:r/:s/:t";
    pub const TWENTY_PARAMS_REQUEST: &str = "/a/b/c/d/e/f/g/h/i/j/k/l/m/n/o/p/q/r/s/t";
}
