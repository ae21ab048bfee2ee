//! One adapter per benchmarked router library.
//!
//! Every adapter implements [`Registrar`] for loading and [`Contender`] for
//! dispatch; [`Library`] names them so a benchmark can iterate over all of
//! them without knowing the concrete types.

mod actix;
mod axum;
mod matchit;
mod path_tree;
mod poem;
mod regex;
mod route_recognizer;
mod routefinder;

pub use self::actix::{ActixRegistrar, ActixRouter};
pub use self::axum::{AxumRegistrar, AxumRouter};
pub use self::matchit::MatchitRouter;
pub use self::path_tree::PathTreeRouter;
pub use self::poem::{PoemRegistrar, PoemRouter};
pub use self::regex::{RegexRegistrar, RegexRouter};
pub use self::route_recognizer::RouteRecognizerRouter;
pub use self::routefinder::RoutefinderRouter;

use crate::{
    handler::Handler,
    route::{DynContender, Registrar},
    router, Result,
};
use routebench_types::Route;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Library {
    Axum,
    Poem,
    ActixRouter,
    Matchit,
    PathTree,
    RouteRecognizer,
    Routefinder,
    Regex,
}

impl Library {
    pub const ALL: [Library; 8] = [
        Library::Axum,
        Library::Poem,
        Library::ActixRouter,
        Library::Matchit,
        Library::PathTree,
        Library::RouteRecognizer,
        Library::Routefinder,
        Library::Regex,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Library::Axum => AxumRegistrar::LIBRARY,
            Library::Poem => PoemRegistrar::LIBRARY,
            Library::ActixRouter => ActixRegistrar::LIBRARY,
            Library::Matchit => MatchitRouter::LIBRARY,
            Library::PathTree => PathTreeRouter::LIBRARY,
            Library::RouteRecognizer => RouteRecognizerRouter::LIBRARY,
            Library::Routefinder => RoutefinderRouter::LIBRARY,
            Library::Regex => RegexRegistrar::LIBRARY,
        }
    }

    pub fn try_load(self, routes: &[Route]) -> Result<Box<DynContender>> {
        fn boxed<R: Registrar>(routes: &[Route]) -> Result<Box<DynContender>> {
            Ok(Box::new(router::try_load::<R>(routes)?))
        }

        match self {
            Library::Axum => boxed::<AxumRegistrar>(routes),
            Library::Poem => boxed::<PoemRegistrar>(routes),
            Library::ActixRouter => boxed::<ActixRegistrar>(routes),
            Library::Matchit => boxed::<MatchitRouter>(routes),
            Library::PathTree => boxed::<PathTreeRouter>(routes),
            Library::RouteRecognizer => boxed::<RouteRecognizerRouter>(routes),
            Library::Routefinder => boxed::<RoutefinderRouter>(routes),
            Library::Regex => boxed::<RegexRegistrar>(routes),
        }
    }

    /// Loads a whole table. A table this library cannot take is a defect in
    /// the benchmark itself, so this panics rather than skipping the route.
    pub fn load(self, routes: &[Route]) -> Box<DynContender> {
        match self.try_load(routes) {
            Ok(router) => router,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_load_single(
        self,
        method: &str,
        path: &str,
        handler: Handler,
    ) -> Result<Box<DynContender>> {
        fn boxed<R: Registrar>(method: &str, path: &str, handler: Handler) -> Result<Box<DynContender>> {
            Ok(Box::new(router::try_load_single::<R>(method, path, handler)?))
        }

        match self {
            Library::Axum => boxed::<AxumRegistrar>(method, path, handler),
            Library::Poem => boxed::<PoemRegistrar>(method, path, handler),
            Library::ActixRouter => boxed::<ActixRegistrar>(method, path, handler),
            Library::Matchit => boxed::<MatchitRouter>(method, path, handler),
            Library::PathTree => boxed::<PathTreeRouter>(method, path, handler),
            Library::RouteRecognizer => boxed::<RouteRecognizerRouter>(method, path, handler),
            Library::Routefinder => boxed::<RoutefinderRouter>(method, path, handler),
            Library::Regex => boxed::<RegexRegistrar>(method, path, handler),
        }
    }

    pub fn load_single(self, method: &str, path: &str, handler: Handler) -> Box<DynContender> {
        match self.try_load_single(method, path, handler) {
            Ok(router) => router,
            Err(e) => panic!("{}", e),
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
