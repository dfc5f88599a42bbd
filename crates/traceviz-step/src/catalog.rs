use serde::Serialize;

/// Display metadata for one algorithm in an engine's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub summary: &'static str,
}

/// Lookup failure for a catalog key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown algorithm key '{key}'")]
pub struct UnknownAlgorithm {
    pub key: String,
}

impl UnknownAlgorithm {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}
