//! Backend HTTP client.
//!
//! Wraps [`reqwest`] with the backend base URL, per-request auth and locale
//! headers, and the global 401/403 policy.

use std::sync::Arc;

use reqwest::header::{HeaderValue, ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use rideops_core::envelope::ErrorBody;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::events::{AppEvent, EventBus};
use crate::session::Session;

/// Header carrying a per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for the backend REST API.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
    events: Arc<EventBus>,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        session: Arc<Session>,
        events: Arc<EventBus>,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_client(client, config, session, events))
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(
        client: reqwest::Client,
        config: &ClientConfig,
        session: Arc<Session>,
        events: Arc<EventBus>,
    ) -> Self {
        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            session,
            events,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    /// Absolute URL for a stored file path; absolute URLs pass through.
    pub fn file_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    // ---- verbs ----

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path)?;
        self.send(request).await
    }

    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::GET, path)?.query(query);
        self.send(request).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path)?.json(body);
        self.send(request).await
    }

    /// `POST` without a request body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path)?;
        self.send(request).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PUT, path)?.json(body);
        self.send(request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::DELETE, path)?;
        self.send(request).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path)?.multipart(form);
        self.send(request).await
    }

    // ---- private helpers ----

    /// Build a request with the standard headers. The token and language
    /// are read from the session at call time.
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = uuid::Uuid::new_v4().to_string();
        let language = self.session.language();

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json")
            .header(ACCEPT_LANGUAGE, language.as_str())
            .header(REQUEST_ID_HEADER, request_id.as_str());

        let token = self.session.bearer_token();
        if let Some(token) = &token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
            builder = builder.header(AUTHORIZATION, value);
        }

        tracing::debug!(
            %method,
            path,
            request_id = %request_id,
            language = language.as_str(),
            has_token = token.is_some(),
            "Backend request"
        );
        Ok(builder)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let response = self.ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Map non-2xx responses to [`ApiError`], applying the session policy
    /// for 401 and 403.
    async fn ensure_success(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);

        match status {
            StatusCode::UNAUTHORIZED => {
                tracing::warn!("Backend rejected credentials, clearing session token");
                self.session.clear_token();
                self.events.publish(AppEvent::SessionExpired);
                Err(ApiError::Unauthorized { message })
            }
            StatusCode::FORBIDDEN => {
                tracing::warn!(message = ?message, "Backend denied access");
                self.events.publish(AppEvent::AccessDenied {
                    message: message.clone(),
                });
                Err(ApiError::Forbidden { message })
            }
            _ => Err(ApiError::Api {
                status: status.as_u16(),
                message,
                body,
            }),
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
