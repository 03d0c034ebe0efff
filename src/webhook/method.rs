//! The closed set of request methods a webhook may use.

use std::fmt;
use std::str::FromStr;

use super::DispatchError;

/// HTTP method for a webhook request.
///
/// Only these four verbs are selectable. Parsing is exact and
/// case-sensitive, so `"post"` and `"PATCH"` are both rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    /// `GET`, sent without a body
    Get,
    /// `POST`, sent with the message body
    Post,
    /// `PUT`, sent with the message body
    Put,
    /// `DELETE`, sent without a body
    Delete,
}

impl RequestMethod {
    /// All selectable methods, in display order.
    pub const ALL: [Self; 4] = [Self::Get, Self::Post, Self::Put, Self::Delete];

    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns true if requests with this method carry the message body.
    #[must_use]
    pub const fn attaches_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Converts to the `http` crate's method type.
    #[must_use]
    pub fn to_http(self) -> http::Method {
        match self {
            Self::Get => http::Method::GET,
            Self::Post => http::Method::POST,
            Self::Put => http::Method::PUT,
            Self::Delete => http::Method::DELETE,
        }
    }
}

impl FromStr for RequestMethod {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| DispatchError::InvalidMethod(s.to_string()))
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
