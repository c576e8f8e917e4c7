use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("level table is empty")]
    NoLevels,
    #[error("level {index}: threshold {threshold} does not exceed the previous level's {previous}")]
    UnorderedThreshold {
        index: usize,
        threshold: u32,
        previous: u32,
    },
    #[error("level {index}: spawn interval must be positive")]
    ZeroInterval { index: usize },
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("landmark worker is not ready")]
    NotReady,
    #[error("frame capture failed: {0}")]
    Capture(String),
    #[error("posting to the worker failed: {0}")]
    Post(String),
    #[error("malformed worker message: {0}")]
    Malformed(String),
}
