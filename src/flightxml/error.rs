use crate::remote::RemoteError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlightXmlError {
    #[error("Unable to parse params: {0}")]
    InvalidParams(String),

    #[error("Invalid Action: {0}")]
    UnknownAction(String),

    #[error("Missing Params: {0}")]
    MissingParam(String),

    #[error(transparent)]
    RemoteFault(#[from] RemoteError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FlightXmlError>;
