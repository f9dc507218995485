use crate::{
    api::{ErrorResponse, Response, ResponseCreateParams},
    config::Config,
    errors::{ResponsesError, ResponsesResult},
    files::{FileObject, FilePurpose, VectorStoreFile, VectorStoreFileCreateParams},
};
use reqwest::{
    header::{self, HeaderValue},
    multipart, Client,
};
use serde::de::DeserializeOwned;
use tracing::debug;

/// The seam between request construction and the network. The dispatch loop
/// runs against this trait so tests can substitute a double for the remote
/// service.
#[async_trait::async_trait]
pub trait ResponsesApi: Send + Sync {
    async fn create_response(&self, params: ResponseCreateParams) -> ResponsesResult<Response>;
}

pub struct ResponsesClient {
    base_url: String,
    client: Client,
}

pub struct ResponsesClientOptions {
    pub api_key: String,
    pub base_url: Option<String>,
}

impl ResponsesClient {
    /// # Panics
    ///
    /// Panics if the API key contains bytes that cannot appear in an HTTP
    /// header.
    #[must_use]
    pub fn new(options: ResponsesClientOptions) -> Self {
        let mut headers = header::HeaderMap::new();
        let mut auth_header_value: HeaderValue =
            format!("Bearer {}", options.api_key).try_into().unwrap();
        auth_header_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_header_value);

        Self {
            base_url: options
                .base_url
                .unwrap_or("https://api.openai.com/v1".to_string()),
            client: Client::builder().default_headers(headers).build().unwrap(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(ResponsesClientOptions {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Perform exactly one create-response call. Any non-success status is
    /// returned as an error; there is no retry or classification.
    pub async fn create_response(
        &self,
        params: &ResponseCreateParams,
    ) -> ResponsesResult<Response> {
        debug!(model = params.model.as_str(), "creating response");

        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .json(params)
            .send()
            .await?;

        let response: Response = decode(response).await?;
        debug!(id = response.id.as_str(), "response created");
        Ok(response)
    }

    /// Upload raw file bytes with a declared purpose and content type,
    /// obtaining a storage identifier for later requests.
    pub async fn upload_file(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        mime_type: &str,
        purpose: FilePurpose,
    ) -> ResponsesResult<FileObject> {
        debug!(filename, purpose = purpose.as_str(), "uploading file");

        let part = multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime_type)?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("purpose", purpose.as_str());

        let response = self
            .client
            .post(format!("{}/files", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let file: FileObject = decode(response).await?;
        debug!(id = file.id.as_str(), "file uploaded");
        Ok(file)
    }

    /// Register an uploaded file against a server-side vector store, with
    /// optional typed attributes for filtering.
    pub async fn create_vector_store_file(
        &self,
        vector_store_id: &str,
        params: &VectorStoreFileCreateParams,
    ) -> ResponsesResult<VectorStoreFile> {
        debug!(
            vector_store_id,
            file_id = params.file_id.as_str(),
            "attaching file to vector store"
        );

        let response = self
            .client
            .post(format!(
                "{}/vector_stores/{}/files",
                self.base_url, vector_store_id
            ))
            .json(params)
            .send()
            .await?;

        decode(response).await
    }
}

#[async_trait::async_trait]
impl ResponsesApi for ResponsesClient {
    async fn create_response(&self, params: ResponseCreateParams) -> ResponsesResult<Response> {
        Self::create_response(self, &params).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ResponsesResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await?;
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map_or(body, |parsed| parsed.error.message);
        return Err(ResponsesError::Api(status, message));
    }

    Ok(response.json::<T>().await?)
}
