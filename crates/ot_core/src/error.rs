use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("probability out of range: {name} = {value}")]
    InvalidProbability { name: String, value: f64 },
}

pub type Result<T> = std::result::Result<T, EngineError>;
