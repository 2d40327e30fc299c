//! Sefaria transport trait and reqwest-based HTTP implementation.

use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use crate::{ApiError, ClientFuture};

pub const SEFARIA_BASE_URL: &str = "https://www.sefaria.org";

pub trait SefariaTransport: Send + Sync + std::fmt::Debug {
    fn get_json<'a>(
        &'a self,
        path: &'a str,
        query: &'a [(String, String)],
    ) -> ClientFuture<'a, Result<Value, ApiError>>;

    fn post_json<'a>(
        &'a self,
        path: &'a str,
        body: Value,
    ) -> ClientFuture<'a, Result<Value, ApiError>>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: SEFARIA_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn parse_error(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .unwrap_or_else(|| format!("Sefaria request failed with status {status}"));

        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::invalid_request(message)
            }
            StatusCode::NOT_FOUND => ApiError::not_found(message),
            StatusCode::TOO_MANY_REQUESTS => ApiError::rate_limited(message),
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                ApiError::timeout(message)
            }
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
                ApiError::unavailable(message)
            }
            _ => ApiError::transport(message),
        }
    }

    async fn read_json(response: Response) -> Result<Value, ApiError> {
        if !response.status().is_success() {
            return Err(Self::parse_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|err| ApiError::malformed(err.to_string()))
    }
}

impl SefariaTransport for HttpTransport {
    fn get_json<'a>(
        &'a self,
        path: &'a str,
        query: &'a [(String, String)],
    ) -> ClientFuture<'a, Result<Value, ApiError>> {
        Box::pin(async move {
            let url = self.endpoint(path);
            let response = self
                .client
                .get(url)
                .query(query)
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        ApiError::timeout(err.to_string())
                    } else {
                        ApiError::transport(err.to_string())
                    }
                })?;

            Self::read_json(response).await
        })
    }

    fn post_json<'a>(
        &'a self,
        path: &'a str,
        body: Value,
    ) -> ClientFuture<'a, Result<Value, ApiError>> {
        Box::pin(async move {
            let url = self.endpoint(path);
            let response = self
                .client
                .post(url)
                .json(&body)
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        ApiError::timeout(err.to_string())
                    } else {
                        ApiError::transport(err.to_string())
                    }
                })?;

            Self::read_json(response).await
        })
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    parsed
        .get("error")
        .and_then(Value::as_str)
        .map(ToString::to_string)
}
