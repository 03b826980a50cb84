use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] mp_config::ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] mp_store::StoreError),

    #[error("AI gateway error: {0}")]
    Ai(#[from] mp_ai::AiError),

    #[error("Metrics exporter error: {message}")]
    Metrics { message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
