use crate::body::Body;
use crate::bounded::BoxError;
use crate::header::Headers;

pub use http::StatusCode;

/// An HTTP response as handed over by a transport.
///
/// A plain value aggregate; nothing here is lazy or connection-backed. The
/// reason phrase is kept exactly as received, which may differ from the
/// canonical reason for the status code.
#[derive(Debug)]
pub struct Response {
    /// The response's status code.
    pub status: StatusCode,

    /// The reason phrase from the status line.
    pub reason: String,

    /// The response's headers, in receive order.
    pub headers: Headers,

    /// The response body, if the response carried one.
    pub body: Option<Body>,
}

impl Response {
    pub fn new(
        status: StatusCode,
        reason: impl Into<String>,
        headers: Headers,
        body: Option<Body>,
    ) -> Response {
        Response {
            status,
            reason: reason.into(),
            headers,
            body,
        }
    }
}

/// Replace a possibly-streamed response body with an equivalent in-memory
/// one.
///
/// A response whose body is absent or already buffered moves through
/// untouched. Otherwise the stream is read to exhaustion exactly once and
/// the response is rebuilt with the same status, reason, and headers around
/// a buffered body carrying the original MIME type. The result's body is
/// therefore always re-readable, and materializing it again is a no-op.
///
/// A read error from the stream is returned as-is; no partially-built
/// response ever escapes.
pub async fn materialize(response: Response) -> Result<Response, BoxError> {
    let Response {
        status,
        reason,
        headers,
        body,
    } = response;

    let body = match body {
        Some(body) if body.is_streamed() => Some(body.into_buffered().await?),
        body => body,
    };

    Ok(Response {
        status,
        reason,
        headers,
        body,
    })
}
