use crate::{Error, Result};
use std::{fmt, str::FromStr};

/// The HTTP methods a route table may use.
///
/// Anything outside this set is a configuration defect in the table and is
/// rejected when the table is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub const COUNT: usize = 5;

    pub const ALL: [Method; Method::COUNT] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Dense index, usable as a slot in a fixed-size per-method table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Maps a wire method back onto the enumeration. Methods outside the set
    /// (HEAD, OPTIONS, extensions) have no slot.
    pub fn from_http(method: &http::Method) -> Option<Method> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == method.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            other => Err(Error::UnknownMethod(other.to_owned())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> http::Method {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Patch => http::Method::PATCH,
            Method::Delete => http::Method::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_method() {
        for method in Method::ALL {
            assert_eq!(method.as_str().parse::<Method>(), Ok(method));
        }
    }

    #[test]
    fn rejects_lowercase_and_unknown() {
        assert_eq!(
            "get".parse::<Method>(),
            Err(Error::UnknownMethod("get".to_string()))
        );
        assert!("HEAD".parse::<Method>().is_err());
        assert!("".parse::<Method>().is_err());
    }

    #[test]
    fn index_is_dense() {
        for (i, method) in Method::ALL.into_iter().enumerate() {
            assert_eq!(method.index(), i);
        }
    }

    #[test]
    fn round_trips_through_http() {
        for method in Method::ALL {
            let wire: http::Method = method.into();
            assert_eq!(Method::from_http(&wire), Some(method));
        }
        assert_eq!(Method::from_http(&http::Method::HEAD), None);
    }

    #[test]
    fn unknown_method_message() {
        let err = "FOO".parse::<Method>().unwrap_err();
        assert_eq!(err.to_string(), "unknown HTTP method: FOO");
    }
}
