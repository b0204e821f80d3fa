use thiserror::Error;

pub type RestoResult<T> = Result<T, RestoError>;

#[derive(Error, Debug)]
pub enum RestoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Insufficient loyalty points: requested {requested}, available {available}")]
    InsufficientPoints { requested: u64, available: u64 },

    #[error("Promotion '{code}' is not active")]
    PromotionInactive { code: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
