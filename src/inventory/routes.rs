use std::fmt;

use serde::{Deserialize, Serialize};

/// The HTTP verb declared on a route, as reported by the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpVerb {
    /// `GET` requests.
    Get,
    /// `POST` requests.
    Post,
    /// `PUT` requests.
    Put,
    /// `PATCH` requests.
    Patch,
    /// `DELETE` requests.
    Delete,
    /// The wildcard verb matching every method on a resource.
    Any,
    /// Any other verb (e.g. `OPTIONS`, `HEAD`). Routes declared with these
    /// stay outside the authorization surface.
    Other(String),
}

impl HttpVerb {
    /// Parse a declared method string, case-insensitively.
    pub fn from_method(method: &str) -> Self {
        let lower = method.trim().to_ascii_lowercase();
        match lower.as_str() {
            "get" => HttpVerb::Get,
            "post" => HttpVerb::Post,
            "put" => HttpVerb::Put,
            "patch" => HttpVerb::Patch,
            "delete" => HttpVerb::Delete,
            "any" => HttpVerb::Any,
            _ => HttpVerb::Other(lower),
        }
    }

    /// Lowercase token used in action identifiers and reports.
    pub fn as_str(&self) -> &str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Patch => "patch",
            HttpVerb::Delete => "delete",
            HttpVerb::Any => "any",
            HttpVerb::Other(token) => token,
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single declared route: verb plus resource path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Declared verb, possibly the wildcard.
    pub verb: HttpVerb,
    /// Resource path as declared, e.g. `/podcasts/{podcastId}`.
    pub path: String,
}

impl RouteDescriptor {
    /// Build a descriptor from the raw method and path strings the
    /// inventory collaborator exposes.
    pub fn new(method: &str, path: impl Into<String>) -> Self {
        RouteDescriptor {
            verb: HttpVerb::from_method(method),
            path: path.into(),
        }
    }
}
