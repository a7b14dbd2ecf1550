//! HTTP adapter over the CMS REST API.

use crate::error::{ApiError, ErrorBody};
use crate::state::EntityId;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Paged collection envelope returned by every CMS list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    /// Records on this page, in server order.
    pub nodes: Vec<T>,
    /// Server-side count of all matching records.
    pub total: i64,
}

/// Adapter wrapping one `reqwest::Client` with the API root and optional
/// space scoping.
///
/// Every entity action set goes through this adapter; it owns the error
/// shape normalization so transport and server failures surface as one
/// [`ApiError`] taxonomy regardless of entity type.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    space: Option<u64>,
}

impl RestClient {
    /// Create a client for the given API root.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            space: None,
        }
    }

    /// Scope every request to a space via the `X-Space` header.
    #[must_use]
    pub fn with_space(mut self, space: u64) -> Self {
        self.space = Some(space);
        self
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{path}", self.base_url));
        if let Some(space) = self.space {
            builder = builder.header("X-Space", space);
        }
        builder
    }

    /// GET `{base}` with the given query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// undecodable body.
    pub async fn list<T: DeserializeOwned>(
        &self,
        base: &str,
        params: &[(String, String)],
    ) -> Result<Paged<T>, ApiError> {
        let response = self
            .request(Method::GET, base)
            .query(params)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse_json(response).await
    }

    /// POST `{base}/default`, seeding a space's default records.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// undecodable body.
    pub async fn seed_defaults<T: DeserializeOwned>(&self, base: &str) -> Result<Paged<T>, ApiError> {
        let response = self
            .request(Method::POST, &format!("{base}/default"))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse_json(response).await
    }

    /// GET `{base}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, base: &str, id: EntityId) -> Result<T, ApiError> {
        let response = self
            .request(Method::GET, &format!("{base}/{id}"))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse_json(response).await
    }

    /// POST `{base}` with `body`. The response body (entity or empty) is
    /// not consumed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn create<B: Serialize + Sync>(&self, base: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, base)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::check_status(response).await.map(|_| ())
    }

    /// PUT `{base}/{id}` with `body`, returning the server's record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// undecodable body.
    pub async fn update<T: Serialize + DeserializeOwned + Sync>(
        &self,
        base: &str,
        id: EntityId,
        body: &T,
    ) -> Result<T, ApiError> {
        let response = self
            .request(Method::PUT, &format!("{base}/{id}"))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse_json(response).await
    }

    /// DELETE `{base}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn delete(&self, base: &str, id: EntityId) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("{base}/{id}"))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Map a non-success response to [`ApiError::Api`], consuming the
    /// body's structured errors when present.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let messages = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.errors)
            .unwrap_or_default();

        Err(ApiError::Api {
            status: status.as_u16(),
            messages,
        })
    }

    async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
