//! Query string normalization.

use std::collections::HashMap;

use crate::listings::record::parse_number;

/// Value of one query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    /// The key appeared more than once; values in order of appearance.
    Multiple(Vec<String>),
}

impl QueryValue {
    fn push(&mut self, value: String) {
        match self {
            QueryValue::Single(first) => {
                *self = QueryValue::Multiple(vec![std::mem::take(first), value]);
            }
            QueryValue::Multiple(values) => values.push(value),
        }
    }

    /// The value when the key appeared exactly once.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            QueryValue::Single(v) => Some(v),
            QueryValue::Multiple(_) => None,
        }
    }
}

/// Normalized query parameters of one request. Unknown keys are kept and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: HashMap<String, QueryValue>,
}

impl Query {
    /// Parse a raw (still percent-encoded) query string, without the leading `?`.
    pub fn parse(raw: &str) -> Self {
        let mut params: HashMap<String, QueryValue> = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            let value = value.into_owned();
            match params.get_mut(key.as_ref()) {
                Some(existing) => existing.push(value),
                None => {
                    params.insert(key.into_owned(), QueryValue::Single(value));
                }
            }
        }
        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.get(key)
    }

    /// `furnished=true`, spelled exactly.
    pub fn furnished_only(&self) -> bool {
        self.get("furnished").and_then(QueryValue::as_single) == Some("true")
    }

    /// The `max_price` limit, or `None` when absent or not a number.
    pub fn max_price(&self) -> Option<f64> {
        let limit = match self.get("max_price")? {
            QueryValue::Single(value) => parse_number(value),
            QueryValue::Multiple(_) => f64::NAN,
        };
        (!limit.is_nan()).then_some(limit)
    }
}
