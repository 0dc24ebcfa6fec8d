//! Path parameters captured by a match.
use percent_encoding::percent_decode_str;
use std::{borrow::Cow, error::Error, slice, str::FromStr};
use thiserror::Error;

/// An error encountered while parsing a captured parameter.
///
/// This struct wraps some type's [FromStr::Err][std::str::FromStr::Err].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("failed to parse {:?} in uri: {}", .item, .err)]
pub struct UriError<E: Error> {
    /// The (uridecoded) segment that failed to parse.
    pub item: String,

    /// The inner error.
    pub err: E,
}

/// A single captured parameter.
///
/// `key` borrows from the route tree, `value` from the matched path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Param<'k, 'v> {
    pub key: &'k str,
    pub value: &'v str,
}

/// The parameters of a match, in the order they appear in the pattern.
///
/// ```
/// use waymark::Tree;
///
/// let mut tree = Tree::new();
/// tree.insert("/user/:id/:action", ()).unwrap();
///
/// let route = tree.find("/user/42/edit").unwrap();
/// let pairs: Vec<_> = route.params.iter().map(|p| (p.key, p.value)).collect();
/// assert_eq!(pairs, [("id", "42"), ("action", "edit")]);
///
/// let id: u32 = route.params.parse("id").unwrap().unwrap();
/// assert_eq!(id, 42);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params<'k, 'v>(Vec<Param<'k, 'v>>);

impl<'k, 'v> Params<'k, 'v> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub(crate) fn push(&mut self, param: Param<'k, 'v>) {
        self.0.push(param);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    /// The number of captured parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of parameters this list can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Iterate over the parameters in pattern order.
    pub fn iter(&self) -> slice::Iter<'_, Param<'k, 'v>> {
        self.0.iter()
    }

    /// The raw value of the first parameter named `key`.
    pub fn get(&self, key: &str) -> Option<&'v str> {
        self.0.iter().find(|p| p.key == key).map(|p| p.value)
    }

    /// The percent-decoded value of the first parameter named `key`.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD`.
    pub fn decoded(&self, key: &str) -> Option<Cow<'v, str>> {
        self.get(key)
            .map(|value| percent_decode_str(value).decode_utf8_lossy())
    }

    /// Decode and parse the parameter named `key` with `T`'s [FromStr] impl.
    ///
    /// Returns `None` if there is no such parameter.
    pub fn parse<T>(&self, key: &str) -> Option<Result<T, UriError<T::Err>>>
    where
        T: FromStr,
        T::Err: Error,
    {
        let item = self.decoded(key)?;

        Some(
            (item.parse::<T>())
                .map_err(|err| (item.into_owned(), err))
                .map_err(|(item, err)| UriError { item, err }),
        )
    }

    /// Copy the parameters out of the borrowed tree and path.
    pub fn to_owned_pairs(&self) -> Vec<(String, String)> {
        (self.0.iter())
            .map(|p| (p.key.to_owned(), p.value.to_owned()))
            .collect()
    }
}

impl<'a, 'k, 'v> IntoIterator for &'a Params<'k, 'v> {
    type Item = &'a Param<'k, 'v>;
    type IntoIter = slice::Iter<'a, Param<'k, 'v>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
