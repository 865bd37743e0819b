use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Sends the request and decodes a JSON body; non-2xx responses become
    /// `ApiError`s built from the backend's `detail` payload.
    pub(super) async fn send_json<T>(&self, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Failed to build request: {}", e)))?;
        let (status, body) = self.dispatch(request).await?;
        decode_response(status, &body)
    }

    async fn dispatch(&self, request: reqwest::Request) -> Result<(StatusCode, String), ApiError> {
        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock_registry::find_mock(request.url().as_str()) {
            let mock = responder.respond(&request)?;
            let status = StatusCode::from_u16(mock.status)
                .map_err(|_| ApiError::unknown(format!("invalid mock status {}", mock.status)))?;
            return Ok((status, mock.body.to_string()));
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok((status, body))
    }
}

pub(crate) fn decode_response<T>(status: StatusCode, body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if status.is_success() {
        serde_json::from_str(body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    } else {
        Err(ApiError::from_response_body(status.as_u16(), body))
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};
