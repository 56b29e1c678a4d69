//! Query parameters of a matrix URI.

use std::str::FromStr;

use crate::constants::{ACTION_PARAM, VIA_PARAM};

/// Query parameters from a matrix URI, in the order they appeared.
///
/// Keys may repeat and values are kept verbatim, without percent-decoding.
///
/// # Examples
///
/// ```
/// use matrix_uri::QueryParams;
///
/// let params = QueryParams::parse("via=a.org&via=b.org&action=join");
/// assert_eq!(params.len(), 3);
/// assert_eq!(params.get_all("via").collect::<Vec<_>>(), ["a.org", "b.org"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

/// Query parameters sorted into the reserved `via` and `action` keys and
/// everything else.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct LinkParams {
    pub(crate) via: Vec<String>,
    pub(crate) action: Option<String>,
    pub(crate) unknown: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty query params instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes a query string (without leading '?').
    ///
    /// Tokens are separated by `&` and split on the first `=`. A token
    /// without `=` is a key with an empty value, so an empty token between
    /// two `&` yields an empty key and value. An empty query has no tokens.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return Self::new();
        }

        let pairs = input
            .split('&')
            .map(|token| match token.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (token.to_string(), String::new()),
            })
            .collect();

        Self { pairs }
    }

    /// Returns the values of every occurrence of `name`, in order.
    pub fn get_all<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the value of the last occurrence of `name`, if any.
    #[must_use]
    pub fn get_last(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the query is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns an iterator over the parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sorts the parameters into routing hints, the action and the rest.
    ///
    /// `via` accumulates every value, `action` keeps the last value and
    /// drops the earlier ones, all other pairs pass through in order.
    pub(crate) fn into_link_params(self) -> LinkParams {
        let mut params = LinkParams::default();

        for (key, value) in self.pairs {
            match key.as_str() {
                VIA_PARAM => params.via.push(value),
                ACTION_PARAM => params.action = Some(value),
                _ => params.unknown.push((key, value)),
            }
        }

        params
    }
}

impl FromStr for QueryParams {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
