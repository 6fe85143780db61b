use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

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
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// `path` starts with `/` and keeps the API's trailing slash.
    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))?;
        debug!("{} {}", request.method(), request.url());

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = test_hooks::responder_for(request.url().as_str()) {
            return responder.respond(&request).map(MockResponse::into_response);
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(builder).await?;
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))
        } else {
            Err(error_from_response(response).await)
        }
    }

    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = self.send(builder).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let body = if text.trim().is_empty() {
        None
    } else {
        Some(serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text)))
    };
    ApiError::from_response(status, body)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use test_hooks::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_hooks {
    use super::*;
    use std::sync::{Arc, Mutex, OnceLock};

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Clone, Debug)]
    pub struct MockResponse {
        status: u16,
        body: Option<Value>,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self {
                status,
                body: Some(body),
            }
        }

        pub fn empty(status: u16) -> Self {
            Self { status, body: None }
        }

        pub(super) fn into_response(self) -> Response {
            let mut builder = http::Response::builder().status(self.status);
            let bytes = match self.body {
                Some(body) => {
                    builder = builder.header("content-type", "application/json");
                    serde_json::to_vec(&body).unwrap_or_default()
                }
                None => Vec::new(),
            };
            Response::from(builder.body(bytes).expect("valid mock response"))
        }
    }

    type Registry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

    fn registry() -> &'static Registry {
        static MOCKS: OnceLock<Registry> = OnceLock::new();
        MOCKS.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        let mut mocks = registry().lock().expect("mock registry");
        mocks.retain(|(base, _)| *base != base_url);
        mocks.push((base_url, responder));
    }

    pub(super) fn responder_for(url: &str) -> Option<Arc<dyn TestResponder>> {
        let mocks = registry().lock().expect("mock registry");
        mocks
            .iter()
            .filter(|(base, _)| url.starts_with(base.as_str()))
            .max_by_key(|(base, _)| base.len())
            .map(|(_, responder)| Arc::clone(responder))
    }
}
