//! Read-only view of an incoming request, as seen by the gate and resolver.

/// What the core needs from a request.
pub trait RequestParts {
    /// First value of query parameter `name`, if present.
    fn query_first(&self, name: &str) -> Option<&str>;

    /// Value of header `name`, looked up case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;
}

/// Owned request parts, used by tests and by callers without an HTTP stack.
#[derive(Debug, Clone, Default)]
pub struct RequestSnapshot {
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl RequestSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl RequestParts for RequestSnapshot {
    fn query_first(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
