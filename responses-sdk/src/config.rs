use crate::errors::{ResponsesError, ResponsesResult};
use std::env;

/// Process configuration, resolved once at startup and passed explicitly to
/// whatever needs it instead of being read ambiently.
#[derive(Debug, Clone)]
pub struct Config {
    /// The API credential, from `OPENAI_API_KEY`.
    pub api_key: String,

    /// Optional endpoint override, from `OPENAI_BASE_URL`.
    pub base_url: Option<String>,

    /// The target retrieval index, from `VECTOR_STORE_ID`. Only required by
    /// programs that register files for file search.
    pub vector_store_id: Option<String>,
}

impl Config {
    pub fn from_env() -> ResponsesResult<Self> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            ResponsesError::Config("OPENAI_API_KEY environment variable must be set".to_string())
        })?;

        Ok(Self {
            api_key,
            base_url: env::var("OPENAI_BASE_URL").ok(),
            vector_store_id: env::var("VECTOR_STORE_ID").ok(),
        })
    }

    /// The vector store identifier, or a config error if it was not set.
    pub fn vector_store_id(&self) -> ResponsesResult<&str> {
        self.vector_store_id.as_deref().ok_or_else(|| {
            ResponsesError::Config("VECTOR_STORE_ID environment variable must be set".to_string())
        })
    }
}
