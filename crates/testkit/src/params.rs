// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Route parameters.

/// A single named path parameter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub key: String,
    pub value: String,
}

/// Path parameters in route order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<Param>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, keeping earlier ones with the same key
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push(Param {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Value of the first parameter named `key`
    pub fn by_name(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |params, (k, v)| params.with(k, v))
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
