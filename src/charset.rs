use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Fallback charset for MIME types that declare none.
pub const DEFAULT_CHARSET: &str = "UTF-8";

// The parameter name must be preceded by a non-word character; the token
// runs until whitespace or a semicolon.
static CHARSET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\Wcharset=([^\s;]+)").unwrap());

/// Extract the declared charset from a MIME content-type string.
///
/// The `charset` parameter name matches case-insensitively; the returned
/// token keeps its original casing. Double quotes and backslashes are
/// stripped from the token wherever they appear, not just as a matching
/// pair at the ends, so an escaped quote inside the token is dropped too.
/// An empty or charset-free input yields [`DEFAULT_CHARSET`]; this never
/// fails.
pub fn parse_charset(mime_type: &str) -> Cow<'_, str> {
    let token = match CHARSET
        .captures(mime_type)
        .and_then(|captures| captures.get(1))
    {
        Some(token) => token.as_str(),
        None => return Cow::Borrowed(DEFAULT_CHARSET),
    };

    if token.contains(['"', '\\']) {
        Cow::Owned(token.replace(['"', '\\'], ""))
    } else {
        Cow::Borrowed(token)
    }
}
