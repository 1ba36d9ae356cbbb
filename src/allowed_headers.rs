use crate::util::{normalize_lower, split_list};
use indexmap::IndexSet;

/// Request header names a resource accepts, stored lowercase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedHeaders {
    headers: IndexSet<String>,
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers = values
            .into_iter()
            .map(|value| normalize_lower(value.into().trim()))
            .collect();

        Self { headers }
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str)
    }

    pub fn allows_header(&self, name: &str) -> bool {
        let name = name.trim();
        if name.bytes().any(|byte| byte.is_ascii_uppercase()) || !name.is_ascii() {
            self.headers.contains(&normalize_lower(name))
        } else {
            self.headers.contains(name)
        }
    }

    /// Keeps the entries of a comma-separated `Access-Control-Request-Headers`
    /// value that are allowed, in request order and spelled as requested.
    pub fn filter<'a>(&self, request_headers: &'a str) -> Vec<&'a str> {
        split_list(request_headers)
            .filter(|name| self.allows_header(name))
            .collect()
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
