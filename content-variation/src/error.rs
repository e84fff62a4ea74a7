use thiserror::Error;

/// Both variants are programming errors in the pool setup. They are raised when the pools
/// are registered and must abort the page build rather than publish repeated or truncated
/// copy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariationError {
    #[error("pool '{pool}' is misconfigured: {reason}")]
    Configuration { pool: String, reason: String },
    #[error("pool '{pool}' holds {available} fragments, cannot pick {requested} distinct ones")]
    InsufficientPoolSize {
        pool: String,
        requested: usize,
        available: usize,
    },
}

impl VariationError {
    pub fn empty_pool(pool: &str) -> Self {
        VariationError::Configuration {
            pool: pool.to_string(),
            reason: "pool holds no fragments".to_string(),
        }
    }
}
