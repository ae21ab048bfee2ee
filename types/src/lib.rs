pub mod error;
pub mod method;
pub mod route;

pub use error::Error;
pub use method::Method;
pub use route::Route;

pub type Result<T> = std::result::Result<T, Error>;
