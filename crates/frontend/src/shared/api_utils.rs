//! API utilities for talking to the PMM backend.
//!
//! Provides helper functions for constructing API URLs and query strings.

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location, using
/// port 8001 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8001"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8001", protocol, hostname)
}

/// WebSocket base derived from the same location ("ws://host:8001").
pub fn ws_base() -> String {
    api_base()
        .replacen("https:", "wss:", 1)
        .replacen("http:", "ws:", 1)
}

/// Build a full API URL from a path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Accumulates query parameters and renders them percent-encoded.
/// Parameters with `None` values are omitted, mirroring the backend's
/// optional query contract.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn push_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Render as "?a=b&c=d", or an empty string when nothing was pushed.
    pub fn build(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();
        format!("?{}", encoded.join("&"))
    }
}

/// The events endpoint accepts limits between 1 and 1000.
pub fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, 1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder_encodes_values() {
        let qs = QueryBuilder::new()
            .push("db", ".data/pmm.db")
            .push("kind", "commitment_open")
            .build();
        assert_eq!(qs, "?db=.data%2Fpmm.db&kind=commitment_open");
    }

    #[test]
    fn test_query_builder_omits_none() {
        let qs = QueryBuilder::new()
            .push_opt("kind", None::<String>)
            .push_opt("limit", Some(50))
            .build();
        assert_eq!(qs, "?limit=50");
    }

    #[test]
    fn test_query_builder_empty() {
        assert_eq!(QueryBuilder::new().build(), "");
    }

    #[test]
    fn test_clamp_limit_bounds() {
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(50), 50);
        assert_eq!(clamp_limit(5000), 1000);
    }
}
