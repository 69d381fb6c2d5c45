use crate::bounded::{BoxError, BoxStream, Send, Sync};

use std::error::Error as StdError;
use std::fmt;
use std::future::poll_fn;
use std::pin::{pin, Pin};
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures_core::Stream;

// Matches the transport's usual read size; used to seed the accumulator.
const BUFFER_SIZE: usize = 0x1000;

/// The body of an HTTP message, tagged with its declared MIME type.
///
/// A body is either *streamed*, wrapping a one-shot stream of byte chunks
/// that can be read to exhaustion at most once, or *buffered*, wrapping an
/// in-memory buffer that can be re-read any number of times. The MIME type
/// is carried verbatim as received and never parsed here.
pub struct Body {
    mime: String,
    kind: BodyKind,
}

enum BodyKind {
    Stream(BoxStream<'static, Result<Bytes, BoxError>>),
    Buffered(Bytes),
}

impl Body {
    /// Create a streamed `Body` from a stream of byte chunks.
    ///
    /// The stream is one-shot: it is read at most once, when the body is
    /// drained by [`into_buffered`](Body::into_buffered).
    pub fn stream<S, E>(mime: impl Into<String>, stream: S) -> Self
    where
        S: Stream<Item = Result<Bytes, E>> + Send + Sync + 'static,
        E: StdError + Send + Sync + 'static,
    {
        Body {
            mime: mime.into(),
            kind: BodyKind::Stream(Box::pin(MapErr { inner: stream })),
        }
    }

    /// Create a buffered `Body` directly from bytes.
    pub fn buffered(mime: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Body {
            mime: mime.into(),
            kind: BodyKind::Buffered(bytes.into()),
        }
    }

    /// Create a buffered plain-text body with a UTF-8 charset parameter.
    pub fn text(text: impl Into<String>) -> Self {
        Body::buffered(mime::TEXT_PLAIN_UTF_8.as_ref(), text.into())
    }

    /// Create a buffered `application/octet-stream` body.
    pub fn bytes(bytes: impl Into<Bytes>) -> Self {
        Body::buffered(mime::APPLICATION_OCTET_STREAM.as_ref(), bytes)
    }

    /// The declared MIME type, exactly as supplied.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Whether this body is backed by an in-memory buffer.
    pub fn is_buffered(&self) -> bool {
        matches!(self.kind, BodyKind::Buffered(_))
    }

    /// Whether this body wraps a one-shot byte stream.
    pub fn is_streamed(&self) -> bool {
        matches!(self.kind, BodyKind::Stream(_))
    }

    /// The buffered bytes, if this body is buffered.
    ///
    /// Reading through this accessor consumes nothing and can be repeated
    /// freely. Returns `None` for a streamed body, which has no bytes until
    /// it is drained.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match &self.kind {
            BodyKind::Buffered(bytes) => Some(bytes),
            BodyKind::Stream(_) => None,
        }
    }

    /// A cheap owned handle to the buffered bytes, if this body is buffered.
    pub fn to_bytes(&self) -> Option<Bytes> {
        self.as_bytes().cloned()
    }

    /// Bounds on the number of bytes this body will yield.
    ///
    /// Exact for a buffered body; a streamed body's length is unknown until
    /// it is drained.
    pub fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.kind {
            BodyKind::Stream(_) => (0, None),
            BodyKind::Buffered(bytes) => (bytes.len(), Some(bytes.len())),
        }
    }

    /// Buffer this body in memory, draining its stream if necessary.
    ///
    /// A buffered body is returned as-is. A streamed body is read to
    /// exhaustion exactly once and replaced by a buffered body with the
    /// same MIME type; the stream handle is gone afterwards, so a second
    /// read cannot be expressed. Read errors from the stream surface
    /// unchanged.
    pub async fn into_buffered(self) -> Result<Body, BoxError> {
        let Body { mime, kind } = self;

        let bytes = match kind {
            BodyKind::Buffered(bytes) => bytes,
            BodyKind::Stream(stream) => drain(Some(stream)).await?,
        };

        Ok(Body {
            mime,
            kind: BodyKind::Buffered(bytes),
        })
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            BodyKind::Stream(_) => "Stream",
            BodyKind::Buffered(_) => "Buffered",
        };

        f.debug_struct("Body")
            .field("mime", &self.mime)
            .field("kind", &kind)
            .finish()
    }
}

/// Read a byte-chunk stream to exhaustion, returning the accumulated bytes.
///
/// An absent stream yields an empty buffer, never an absent result. The
/// stream's chunks are concatenated in order; a chunk error is returned to
/// the caller untouched and any bytes accumulated before it are discarded.
/// The stream's lifecycle is not managed beyond reading it.
pub async fn drain<S, E>(stream: Option<S>) -> Result<Bytes, E>
where
    S: Stream<Item = Result<Bytes, E>>,
{
    let stream = match stream {
        Some(stream) => stream,
        None => return Ok(Bytes::new()),
    };

    let mut stream = pin!(stream);
    let mut buf = BytesMut::with_capacity(BUFFER_SIZE);

    while let Some(chunk) = poll_fn(|cx| stream.as_mut().poll_next(cx)).await {
        buf.extend_from_slice(&chunk?);
    }

    Ok(buf.freeze())
}

pin_project_lite::pin_project! {
    struct MapErr<S> {
        #[pin]
        inner: S,
    }
}

impl<T, E, S> Stream for MapErr<S>
where
    E: StdError + Send + Sync + 'static,
    S: Stream<Item = Result<T, E>>,
{
    type Item = Result<T, BoxError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project()
            .inner
            .poll_next(cx)
            .map_err(|err| Box::new(err) as _)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
