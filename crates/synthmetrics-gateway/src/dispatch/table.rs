use std::collections::HashMap;
use std::sync::Arc;

use synthmetrics_core::error::Result;
use synthmetrics_core::model::ensure_unique_uris;
use synthmetrics_core::EndpointConfig;

/// Frozen path table built once at startup.
///
/// Lookup is an exact path match first. Failing that, a configured uri
/// ending in `/` serves every path below it, and the longest such prefix
/// wins (`/api/` beats `/`).
#[derive(Debug, Default)]
pub struct EndpointTable {
    exact: HashMap<String, Arc<EndpointConfig>>,
    subtrees: Vec<Arc<EndpointConfig>>, // longest uri first
}

impl EndpointTable {
    pub fn new(endpoints: Vec<EndpointConfig>) -> Result<Self> {
        ensure_unique_uris(endpoints.iter().map(|ep| ep.uri.as_str()))?;

        let mut exact = HashMap::with_capacity(endpoints.len());
        let mut subtrees = Vec::new();
        for ep in endpoints {
            let ep = Arc::new(ep);
            if ep.uri.ends_with('/') {
                subtrees.push(Arc::clone(&ep));
            }
            exact.insert(ep.uri.clone(), ep);
        }
        subtrees.sort_by(|a, b| b.uri.len().cmp(&a.uri.len()));

        Ok(Self { exact, subtrees })
    }

    pub fn lookup(&self, path: &str) -> Option<Arc<EndpointConfig>> {
        if let Some(ep) = self.exact.get(path) {
            return Some(Arc::clone(ep));
        }
        self.subtrees
            .iter()
            .find(|ep| path.starts_with(ep.uri.as_str()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    pub fn uris(&self) -> Vec<&str> {
        let mut uris: Vec<&str> = self.exact.keys().map(String::as_str).collect();
        uris.sort_unstable();
        uris
    }
}
