//! Finalized outgoing content.

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

/// A response body converted into its final, wire-ready representation:
/// status, headers, and the encoded payload.
///
/// Produced exactly once per response by the pipeline's conversion step.
/// Interceptors running after conversion may rewrite it through
/// `CallRespondAfterTransformContext`, but never un-convert it.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingContent {
    status: StatusCode,
    headers: HeaderMap,
    payload: Bytes,
}

impl OutgoingContent {
    /// Create finalized content from a status and an encoded payload.
    pub fn new(status: StatusCode, payload: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            payload: payload.into(),
        }
    }

    /// The response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable access to the response headers.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Append a header, builder-style.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// The encoded payload.
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Length of the encoded payload in bytes.
    pub fn content_length(&self) -> usize {
        self.payload.len()
    }
}
