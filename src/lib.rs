pub mod body;
pub mod charset;
pub mod executor;
pub mod header;
pub mod response;

mod bounded;

pub use body::{drain, Body};
pub use bounded::{BoxError, BoxTask};
pub use charset::{parse_charset, DEFAULT_CHARSET};
pub use executor::{Executor, Inline};
pub use header::{Header, Headers};
pub use response::{materialize, Response};

pub use bytes::Bytes;
pub use http::StatusCode;
