use bytes::{BufMut, Bytes, BytesMut};
use http::StatusCode;

/// Where a contender writes its response.
///
/// The timing loop uses [`MockResponseWriter`], which throws everything away,
/// so the measured cost stays inside the router.
pub trait ResponseWriter: Send {
    fn write_header(&mut self, status: StatusCode);

    fn write(&mut self, buf: &[u8]) -> usize;

    fn write_str(&mut self, s: &str) -> usize {
        self.write(s.as_bytes())
    }
}

/// Discards all bytes and headers.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockResponseWriter;

impl ResponseWriter for MockResponseWriter {
    fn write_header(&mut self, _status: StatusCode) {}

    fn write(&mut self, buf: &[u8]) -> usize {
        buf.len()
    }
}

/// Keeps the status and body, for inspecting a single dispatch.
#[derive(Debug, Default)]
pub struct ResponseRecorder {
    status: Option<StatusCode>,
    body: BytesMut,
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status written by the contender, or 200 if it only wrote a body.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    pub fn into_body(self) -> Bytes {
        self.body.freeze()
    }
}

impl ResponseWriter for ResponseRecorder {
    fn write_header(&mut self, status: StatusCode) {
        if self.status.is_none() {
            self.status = Some(status);
        }
    }

    fn write(&mut self, buf: &[u8]) -> usize {
        self.body.put_slice(buf);
        buf.len()
    }
}
