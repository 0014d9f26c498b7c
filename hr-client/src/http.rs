//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::DocumentUpload;
use std::time::Duration;

/// HTTP client for making network requests to the HR service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Attach the authorization header, if any
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(t) => request.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", t)),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.authorize(self.client.get(&url)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let request = self.client.get(&url).query(query);
        let response = self.authorize(request).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.authorize(self.client.post(&url).json(body)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let response = self.authorize(self.client.put(&url).json(body)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, discarding the response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let response = self.authorize(self.client.delete(&url)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// POST a document as multipart form data
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        upload: &DocumentUpload,
    ) -> ClientResult<T> {
        let mut form = Form::new();
        for (key, value) in upload.form_fields() {
            form = form.text(key, value);
        }
        if let Some(file) = &upload.file {
            let mime = mime_guess::from_path(&file.file_name).first_or_octet_stream();
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(mime.essence_str())?;
            form = form.part("file", part);
        }

        let url = self.url(path);
        tracing::debug!(%url, document = %upload.document_name, "POST multipart");
        let response = self.authorize(self.client.post(&url).multipart(form)).send().await?;
        Self::handle_response(response).await
    }

    /// Map non-success statuses to errors
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        Err(match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::CONFLICT => ClientError::Conflict(text),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation(text),
            _ => ClientError::Internal(text),
        })
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:8000/api/v1/")).unwrap();
        assert_eq!(
            client.url("/hr/employees"),
            "http://localhost:8000/api/v1/hr/employees"
        );
        assert_eq!(
            client.url("hr/documents/upload"),
            "http://localhost:8000/api/v1/hr/documents/upload"
        );
    }
}
