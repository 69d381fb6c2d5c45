use std::collections::VecDeque;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use ferret::{materialize, Body, Bytes, Headers, Response, StatusCode};
use futures_core::Stream;

/// A test stream that yields a fixed sequence of chunk results.
struct Chunks {
    chunks: VecDeque<Result<Bytes, io::Error>>,
}

impl Chunks {
    fn new(chunks: Vec<Result<Bytes, io::Error>>) -> Chunks {
        Chunks {
            chunks: chunks.into(),
        }
    }
}

impl Stream for Chunks {
    type Item = Result<Bytes, io::Error>;

    fn poll_next(mut self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.chunks.pop_front())
    }
}

fn response(body: Option<Body>) -> Response {
    let headers = Headers::from_iter([
        ("Content-Type", "text/plain; charset=UTF-8"),
        ("X-Request-Id", "42"),
        ("Set-Cookie", "a=1"),
        ("Set-Cookie", "b=2"),
    ]);

    Response::new(StatusCode::OK, "OK", headers, body)
}

fn assert_head_unchanged(response: &Response) {
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.reason, "OK");
    assert_eq!(response.headers.len(), 4);
    assert_eq!(response.headers.get("x-request-id"), Some("42"));
    assert!(response.headers.get_all("set-cookie").eq(["a=1", "b=2"]));
}

#[tokio::test]
async fn buffers_a_streamed_body() {
    let chunks = Chunks::new(vec![
        Ok(Bytes::from_static(b"hello ")),
        Ok(Bytes::from_static(b"world")),
    ]);
    let body = Body::stream("text/plain; charset=UTF-8", chunks);

    let response = materialize(response(Some(body))).await.unwrap();
    assert_head_unchanged(&response);

    let body = response.body.unwrap();
    assert!(body.is_buffered());
    assert_eq!(body.mime(), "text/plain; charset=UTF-8");

    // the buffered body can be read any number of times
    assert_eq!(body.to_bytes().unwrap(), "hello world");
    assert_eq!(body.to_bytes().unwrap(), "hello world");
}

#[tokio::test]
async fn empty_stream_becomes_an_empty_buffer() {
    let body = Body::stream("application/octet-stream", Chunks::new(Vec::new()));

    let response = materialize(response(Some(body))).await.unwrap();

    // still a body, just a zero-length one
    let body = response.body.unwrap();
    assert!(body.is_buffered());
    assert_eq!(body.size_hint(), (0, Some(0)));
}

#[tokio::test]
async fn buffered_body_is_left_untouched() {
    let body = Body::buffered("application/json", Bytes::from_static(b"{\"ok\":true}"));

    let response = materialize(response(Some(body))).await.unwrap();
    assert_head_unchanged(&response);

    let body = response.body.unwrap();
    assert!(body.is_buffered());
    assert_eq!(body.mime(), "application/json");
    assert_eq!(body.to_bytes().unwrap(), "{\"ok\":true}");
}

#[tokio::test]
async fn absent_body_is_left_untouched() {
    let response = materialize(response(None)).await.unwrap();

    assert_head_unchanged(&response);
    assert!(response.body.is_none());
}

#[tokio::test]
async fn idempotent() {
    let chunks = Chunks::new(vec![Ok(Bytes::from_static(b"payload"))]);
    let body = Body::stream("application/octet-stream", chunks);

    let once = materialize(response(Some(body))).await.unwrap();
    let twice = materialize(once).await.unwrap();

    assert_head_unchanged(&twice);
    assert_eq!(twice.body.unwrap().to_bytes().unwrap(), "payload");
}

#[tokio::test]
async fn stream_errors_pass_through() {
    let chunks = Chunks::new(vec![
        Ok(Bytes::from_static(b"partial")),
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset")),
    ]);
    let body = Body::stream("text/plain", chunks);

    let err = materialize(response(Some(body))).await.unwrap_err();
    assert_eq!(err.to_string(), "connection reset");
    assert!(err.downcast_ref::<io::Error>().is_some());
}
