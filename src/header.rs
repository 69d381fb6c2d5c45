use std::fmt;
use std::slice;
use std::vec;

/// A single HTTP header as a name/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// The field name, with its original casing.
    pub name: String,

    /// The field value.
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Header {
        Header {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

impl<N, V> From<(N, V)> for Header
where
    N: Into<String>,
    V: Into<String>,
{
    fn from((name, value): (N, V)) -> Header {
        Header::new(name, value)
    }
}

/// An ordered list of HTTP headers.
///
/// Insertion order and duplicate names are preserved exactly as received.
/// Lookups compare names ASCII-case-insensitively, per HTTP field-name
/// semantics, without touching the stored casing.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Headers {
    list: Vec<Header>,
}

impl Headers {
    pub fn new() -> Headers {
        Headers { list: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The value of the first header with the given name.
    ///
    /// The returned value borrows from the list, not from `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.list
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case(name))
            .map(|header| header.value.as_str())
    }

    /// Every value for the given name, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.list
            .iter()
            .filter(move |header| header.name.eq_ignore_ascii_case(name))
            .map(|header| header.value.as_str())
    }

    /// Append a header, keeping any existing values for the same name.
    pub fn push(&mut self, header: impl Into<Header>) {
        self.list.push(header.into());
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.list.iter(),
        }
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.list).finish()
    }
}

impl From<Vec<Header>> for Headers {
    fn from(list: Vec<Header>) -> Headers {
        Headers { list }
    }
}

impl<H> FromIterator<H> for Headers
where
    H: Into<Header>,
{
    fn from_iter<I>(iter: I) -> Headers
    where
        I: IntoIterator<Item = H>,
    {
        Headers {
            list: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<H> Extend<H> for Headers
where
    H: Into<Header>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = H>,
    {
        self.list.extend(iter.into_iter().map(Into::into));
    }
}

pub struct Iter<'a> {
    inner: slice::Iter<'a, Header>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Header;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for Headers {
    type Item = Header;
    type IntoIter = vec::IntoIter<Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}
