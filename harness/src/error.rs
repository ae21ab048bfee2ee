#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Route(#[from] routebench_types::Error),
    #[error("{library} rejected route {path}: {reason}")]
    Register {
        library: &'static str,
        path: String,
        reason: String,
    },
    #[error(transparent)]
    InvalidUri(#[from] http::uri::InvalidUri),
    #[error(transparent)]
    InvalidPattern(#[from] regex::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    SetSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
    #[error(transparent)]
    SetLogger(#[from] tracing_log::log::SetLoggerError),
}

impl Error {
    pub(crate) fn register(
        library: &'static str,
        path: &str,
        reason: impl std::fmt::Display,
    ) -> Self {
        Error::Register {
            library,
            path: path.to_owned(),
            reason: reason.to_string(),
        }
    }
}
