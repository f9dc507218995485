//! Wire types for the Files API and vector-store file registration.
//!
//! Attaching a local file is a two-step protocol: upload the raw bytes with
//! a declared purpose to obtain a storage identifier, then reference that
//! identifier in a request (optionally registering it against a server-side
//! vector store for retrieval).

use crate::api::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The intended purpose of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilePurpose {
    Assistants,
    Batch,
    #[serde(rename = "fine-tune")]
    FineTune,
    UserData,
    Vision,
}

impl FilePurpose {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Assistants => "assistants",
            Self::Batch => "batch",
            Self::FineTune => "fine-tune",
            Self::UserData => "user_data",
            Self::Vision => "vision",
        }
    }
}

/// A file stored by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileObject {
    /// The file identifier, referenceable in API requests.
    pub id: String,

    /// The size of the file, in bytes.
    pub bytes: u64,

    /// Unix timestamp (in seconds) of when the file was created.
    pub created_at: i64,

    /// The name of the file.
    pub filename: String,

    /// The object type, always `file`.
    pub object: String,

    /// The declared purpose of the file.
    pub purpose: FilePurpose,
}

/// Parameters for registering an uploaded file with a vector store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStoreFileCreateParams {
    /// The identifier of a previously uploaded file.
    pub file_id: String,

    /// Typed attributes stored alongside the file, usable as filter keys in
    /// `file_search` tool declarations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, AttributeValue>>,
}

/// A file attached to a vector store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStoreFile {
    /// The identifier of the vector-store file association.
    pub id: String,

    /// The object type, always `vector_store.file`.
    pub object: String,

    /// Unix timestamp (in seconds) of when the file was attached.
    pub created_at: i64,

    /// The vector store the file was attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_store_id: Option<String>,

    /// One of `in_progress`, `completed`, `cancelled`, or `failed`.
    /// Ingestion continues server-side after this call returns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
