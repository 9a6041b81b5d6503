//! Record Endpoint
//!
//! `GET` and `POST` on the records endpoint.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{fetch_json, RecordsApi};
use crate::error::ApiError;
use crate::models::{NewRecord, RowsResponse, WriteResponse};

/// Limit value meaning "no limit" (the backend default)
pub const ALL_LIMIT: &str = "all";

/// `application/x-www-form-urlencoded` keeps alphanumerics and `*-._`
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Search parameters of a read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowQuery {
    pub q: String,
    pub limit: String,
}

impl RowQuery {
    pub fn new(q: impl Into<String>, limit: impl Into<String>) -> Self {
        Self { q: q.into(), limit: limit.into() }
    }

    /// Query from the raw control values: trimmed search text, and the filter
    /// value or `all` when the filter is missing or blank
    pub fn from_controls(search: Option<String>, filter: Option<String>) -> Self {
        let q = search.map(|s| s.trim().to_string()).unwrap_or_default();
        let limit = filter
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| ALL_LIMIT.to_string());
        Self { q, limit }
    }

    /// Encoded query without the leading `?`; empty parts are left out
    pub fn query_string(&self) -> String {
        let mut pairs = Vec::new();
        if !self.q.is_empty() {
            pairs.push(format!("q={}", encode(&self.q)));
        }
        if !self.limit.is_empty() && self.limit != ALL_LIMIT {
            pairs.push(format!("limit={}", encode(&self.limit)));
        }
        pairs.join("&")
    }

    pub fn url(&self, endpoint: &str) -> String {
        let query = self.query_string();
        if query.is_empty() {
            endpoint.to_string()
        } else {
            format!("{}?{}", endpoint, query)
        }
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, FORM_VALUE)
        .to_string()
        .replace("%20", "+")
}

/// `fetch`-backed records API
#[derive(Debug, Clone)]
pub struct HttpRecordsApi {
    endpoint: String,
}

impl HttpRecordsApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl RecordsApi for HttpRecordsApi {
    async fn fetch_rows(&self, query: &RowQuery) -> Result<RowsResponse, ApiError> {
        let url = query.url(&self.endpoint);
        log::debug!("GET {}", url);
        fetch_json("GET", &url, None).await
    }

    async fn create_record(&self, record: &NewRecord) -> Result<WriteResponse, ApiError> {
        let body = serde_json::to_string(record).map_err(|e| ApiError::Encode(e.to_string()))?;
        log::debug!("POST {} ({} bytes)", self.endpoint, body.len());
        fetch_json("POST", &self.endpoint, Some(&body)).await
    }
}
