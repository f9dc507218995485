use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponsesError {
    /// The request to the service failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service returned a non-success status code. The message is taken
    /// from the error body when it can be decoded, the raw body otherwise.
    #[error("API error: {1} (Status {0})")]
    Api(reqwest::StatusCode, String),
    /// The response from the service was unexpected (e.g. a completed
    /// response without any output items).
    #[error("Invariant: {0}")]
    Invariant(String),
    /// Required process configuration is missing or malformed.
    #[error("Config error: {0}")]
    Config(String),
}

pub type ResponsesResult<T> = Result<T, ResponsesError>;
