// ABOUTME: Rebuildable HTTP request description used by the API client
// ABOUTME: Holds method, path, query, body, timeout, and retry marker so a request can be resent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use runfuel_core::constants::network::REQUEST_ID_HEADER;
use runfuel_core::errors::AppResult;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Request payload
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// JSON document
    Json(Value),
    /// `multipart/form-data` fields
    Multipart(Vec<MultipartField>),
}

/// One field of a multipart body
#[derive(Clone)]
pub enum MultipartField {
    /// Plain text field
    Text {
        /// Field name
        name: String,
        /// Field value
        value: String,
    },
    /// File field
    File {
        /// Field name
        name: String,
        /// File name reported to the server
        file_name: String,
        /// MIME type such as `image/jpeg`
        mime_type: String,
        /// File contents
        bytes: Bytes,
    },
}

// File contents are summarized, not dumped
impl fmt::Debug for MultipartField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { name, value } => f
                .debug_struct("Text")
                .field("name", name)
                .field("value", value)
                .finish(),
            Self::File {
                name,
                file_name,
                mime_type,
                bytes,
            } => f
                .debug_struct("File")
                .field("name", name)
                .field("file_name", file_name)
                .field("mime_type", mime_type)
                .field("len", &bytes.len())
                .finish(),
        }
    }
}

/// A request that can be dispatched more than once
///
/// The API client resends the same description after a token refresh, so
/// everything needed to build the HTTP request lives here rather than in a
/// consumed `reqwest::RequestBuilder`.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: RequestBody,
    timeout: Option<Duration>,
    retried: bool,
    recover_on_unauthorized: bool,
}

impl ApiRequest {
    /// Request with an arbitrary method
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            timeout: None,
            retried: false,
            recover_on_unauthorized: true,
        }
    }

    /// `GET` request
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// `POST` request
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// `PUT` request
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// `PATCH` request
    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// `DELETE` request
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter
    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Append a query parameter when a value is present
    #[must_use]
    pub fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Attach a JSON body
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the body cannot be encoded
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> AppResult<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a multipart body
    #[must_use]
    pub fn multipart(mut self, fields: Vec<MultipartField>) -> Self {
        self.body = RequestBody::Multipart(fields);
        self
    }

    /// Override the client-wide timeout for this request
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Do not attempt a token refresh when this request gets a 401
    ///
    /// Used for credential endpoints where 401 means wrong credentials.
    #[must_use]
    pub const fn without_recovery(mut self) -> Self {
        self.recover_on_unauthorized = false;
        self
    }

    /// HTTP method
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// API path, used as the endpoint name in errors
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in insertion order
    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Request body
    #[must_use]
    pub const fn body(&self) -> &RequestBody {
        &self.body
    }

    /// Per-request timeout, if any
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Whether this is already the post-refresh resubmission
    #[must_use]
    pub const fn is_retried(&self) -> bool {
        self.retried
    }

    /// Whether a 401 may trigger a token refresh
    #[must_use]
    pub const fn recovers_on_unauthorized(&self) -> bool {
        self.recover_on_unauthorized && !self.retried
    }

    /// The resubmission sent after a successful refresh
    #[must_use]
    pub fn into_retry(mut self) -> Self {
        self.retried = true;
        self
    }

    /// Build the `reqwest` request for one dispatch
    ///
    /// # Errors
    ///
    /// Returns an error if a multipart MIME type is invalid
    pub fn to_builder(
        &self,
        http: &Client,
        url: Url,
        access_token: Option<&str>,
        request_id: &str,
    ) -> AppResult<RequestBuilder> {
        let mut builder = http
            .request(self.method.clone(), url)
            .header(REQUEST_ID_HEADER, request_id);

        if !self.query.is_empty() {
            builder = builder.query(&self.query);
        }
        if let Some(token) = access_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder = match &self.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(fields) => builder.multipart(build_form(fields)?),
        };
        Ok(builder)
    }
}

// reqwest forms are single-use, so a fresh one is built for every dispatch
fn build_form(fields: &[MultipartField]) -> AppResult<Form> {
    let mut form = Form::new();
    for field in fields {
        form = match field {
            MultipartField::Text { name, value } => form.text(name.clone(), value.clone()),
            MultipartField::File {
                name,
                file_name,
                mime_type,
                bytes,
            } => {
                let part = Part::bytes(bytes.to_vec())
                    .file_name(file_name.clone())
                    .mime_str(mime_type)?;
                form.part(name.clone(), part)
            }
        };
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_disables_recovery() {
        let request = ApiRequest::get("/api/v1/users/me");
        assert!(request.recovers_on_unauthorized());
        let retry = request.into_retry();
        assert!(retry.is_retried());
        assert!(!retry.recovers_on_unauthorized());
    }

    #[test]
    fn test_query_opt_skips_none() {
        let request = ApiRequest::get("/api/v1/progress/weekly")
            .query_opt("date", None::<&str>)
            .query("period", "30d");
        assert_eq!(
            request.query_pairs(),
            &[("period".to_owned(), "30d".to_owned())]
        );
    }

    #[test]
    fn test_credential_requests_skip_recovery() {
        let request = ApiRequest::post("/api/v1/auth/login").without_recovery();
        assert!(!request.recovers_on_unauthorized());
    }
}
