//! PostgREST row source over `reqwest`
//!
//! Each [`Query`] becomes one `GET {base}/{rest_path}/{table}` request with
//! the rendered filter parameters and the project key sent both as `apikey`
//! and as a bearer token. Non-success answers are mapped to
//! [`ContentError::Backend`] using the backend's JSON error message when
//! present.

use super::repositories::RowSource;
use crate::contract::ContentError;
use crate::domain::query::Query;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: String,
    #[serde(default)]
    details: Option<String>,
}

/// Row source backed by a PostgREST endpoint
pub struct PostgrestSource {
    http: reqwest::Client,
    rest_url: Url,
}

impl PostgrestSource {
    /// Build a source for `base_url` + `rest_path` authenticated with `api_key`
    pub fn new(base_url: &str, rest_path: &str, api_key: &str) -> Result<Self, ContentError> {
        let rest_url = rest_endpoint(base_url, rest_path)?;

        let key = HeaderValue::from_str(api_key).map_err(|e| ContentError::InvalidConfig {
            message: format!("api key is not a valid header value: {}", e),
        })?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
            ContentError::InvalidConfig {
                message: format!("api key is not a valid header value: {}", e),
            }
        })?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ContentError::InvalidConfig {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { http, rest_url })
    }

    fn table_url(&self, query: &Query) -> Result<Url, ContentError> {
        self.rest_url
            .join(query.collection().table())
            .map_err(|e| ContentError::InvalidConfig {
                message: format!("invalid table url: {}", e),
            })
    }
}

#[async_trait]
impl RowSource for PostgrestSource {
    async fn fetch_rows(&self, query: &Query) -> Result<Vec<Value>, ContentError> {
        let url = self.table_url(query)?;
        tracing::debug!(table = %query.collection(), url = %url, "fetching rows");

        let response = self
            .http
            .get(url)
            .query(&query.to_params())
            .send()
            .await
            .map_err(|e| ContentError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::Backend {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| ContentError::Decode {
                collection: query.collection().table().to_string(),
                message: e.to_string(),
            })
    }
}

/// `{base}/{rest_path}/` with exactly one slash between segments, so that
/// joining a table name appends instead of replacing the last segment
fn rest_endpoint(base_url: &str, rest_path: &str) -> Result<Url, ContentError> {
    let joined = format!(
        "{}/{}/",
        base_url.trim_end_matches('/'),
        rest_path.trim_matches('/')
    );
    Url::parse(&joined).map_err(|e| ContentError::InvalidConfig {
        message: format!("invalid backend url '{}': {}", base_url, e),
    })
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<PostgrestErrorBody>(body) {
        Ok(PostgrestErrorBody {
            message,
            details: Some(details),
        }) => format!("{} ({})", message, details),
        Ok(PostgrestErrorBody { message, .. }) => message,
        Err(_) if body.is_empty() => "empty response body".to_string(),
        Err(_) => body.to_string(),
    }
}
