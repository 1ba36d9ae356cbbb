use crate::constants::{MAX_ORIGIN_LENGTH, WILDCARD};
use crate::util::equals_ignore_case;

/// Origins a resource accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Wildcard: every origin is accepted and `*` is emitted.
    Any,
    /// Explicit origins. An empty list accepts nothing.
    List(Vec<String>),
}

/// Outcome of matching a request origin against [`AllowedOrigins`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Emit `Access-Control-Allow-Origin: *`.
    Any,
    /// Emit the literal request origin.
    Echo(String),
    Disallow,
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        AllowedOrigins::List(Vec::new())
    }
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    /// Builds the origin set from configured entries. A `*` entry anywhere in
    /// the list turns the whole set into [`AllowedOrigins::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut origins: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if trimmed == WILDCARD {
                return Self::Any;
            }
            if !origins
                .iter()
                .any(|existing| equals_ignore_case(existing, &trimmed))
            {
                origins.push(trimmed);
            }
        }

        Self::List(origins)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn values(&self) -> &[String] {
        match self {
            Self::Any => &[],
            Self::List(values) => values,
        }
    }

    /// Matches `origin` against the set. With `credentials` the wildcard can
    /// never be emitted, so an `Any` set echoes the literal origin instead.
    pub fn resolve(&self, origin: &str, credentials: bool) -> OriginDecision {
        if origin.is_empty() || origin.len() > MAX_ORIGIN_LENGTH {
            return OriginDecision::Disallow;
        }

        match self {
            Self::Any if credentials => OriginDecision::Echo(origin.to_string()),
            Self::Any => OriginDecision::Any,
            Self::List(values) => {
                if values
                    .iter()
                    .any(|allowed| equals_ignore_case(allowed, origin))
                {
                    OriginDecision::Echo(origin.to_string())
                } else {
                    OriginDecision::Disallow
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "allowed_origins_test.rs"]
mod allowed_origins_test;
