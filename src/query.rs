//! Query string encoding for list and filter endpoints.
//!
//! The Lago API expects Rails-style query strings:
//! - scalars as `key=value`,
//! - arrays as `key[]=v1&key[]=v2` (never comma-joined),
//! - maps as `key[subkey]=value`,
//! - booleans as `true` / `false`.
//!
//! Missing and empty scalar values are omitted. Array items are always kept.

use std::{collections::HashMap, fmt::Display};

/// Ordered list of query parameters. Repeated keys are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty set of query parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key=value`. Empty values are skipped.
    pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
        let value = value.to_string();
        if !value.is_empty() {
            self.pairs.push((key.into(), value));
        }
    }

    /// Appends `key=value` if `value` is present.
    pub fn push_opt<V: Display>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Appends one `key[]=value` pair per item, preserving order.
    pub fn push_list<I>(&mut self, key: &str, values: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let key = format!("{}[]", key);
        for value in values {
            self.pairs.push((key.clone(), value.to_string()));
        }
    }

    /// Appends one `key[subkey]=value` pair per entry.
    pub fn push_map<I, K, V>(&mut self, key: &str, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Display,
        V: Display,
    {
        for (subkey, value) in entries {
            self.push(format!("{}[{}]", key, subkey), value);
        }
    }

    /// Builder-style version of [`push`](crate::query::QueryParams::push).
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.push(key, value);
        self
    }

    /// Builder-style version of [`push_opt`](crate::query::QueryParams::push_opt).
    pub fn with_opt<V: Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.push_opt(key, value);
        self
    }

    /// Builder-style version of [`push_list`](crate::query::QueryParams::push_list).
    pub fn with_list<I>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.push_list(key, values);
        self
    }

    /// Appends all the parameters of `other`.
    pub fn extend(&mut self, other: QueryParams) {
        self.pairs.extend(other.pairs);
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<HashMap<String, String>> for QueryParams {
    fn from(map: HashMap<String, String>) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in map {
            params.push(key, value);
        }
        params
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

/// Types which can be rendered as query parameters, typically list filters.
pub trait ToQuery {
    /// Renders `self` as query parameters.
    fn to_query(&self) -> QueryParams;
}

impl ToQuery for QueryParams {
    fn to_query(&self) -> QueryParams {
        self.clone()
    }
}

/// Pagination parameters shared by all list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListInput {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl ListInput {
    /// Requests a specific page.
    pub fn page(page: u64) -> Self {
        Self {
            page: Some(page),
            per_page: None,
        }
    }
}

impl ToQuery for ListInput {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("page", self.page)
            .with_opt("per_page", self.per_page)
    }
}
