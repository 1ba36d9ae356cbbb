use crate::util::normalize_upper;
use indexmap::IndexSet;

/// Methods a resource supports, stored in canonical uppercase form.
///
/// Membership checks are case-insensitive; the preflight response echoes the
/// method exactly as the browser requested it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedMethods {
    methods: IndexSet<String>,
}

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let methods = values
            .into_iter()
            .map(|value| normalize_upper(value.into().trim()))
            .collect();

        Self { methods }
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(String::as_str)
    }

    pub fn allows_method(&self, method: &str) -> bool {
        let method = method.trim();
        if method.is_empty() {
            return false;
        }

        if method.bytes().any(|byte| byte.is_ascii_lowercase()) || !method.is_ascii() {
            self.methods.contains(&normalize_upper(method))
        } else {
            self.methods.contains(method)
        }
    }

    /// Returns the requested method as sent when it is allowed.
    pub fn echo<'a>(&self, requested: &'a str) -> Option<&'a str> {
        let requested = requested.trim();
        self.allows_method(requested).then_some(requested)
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
