//! Transport layer for the agent service.
//!
//! The service has grown two calling conventions for some operations; the
//! unifier in [`invoke`] masks which one satisfies a logical operation by
//! trying the primary route and falling back once to the alternate route on
//! an endpoint-mismatch failure. Callers see one normalized result shape.

pub mod routes;

use std::time::Duration;

use reqwest::blocking::multipart;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ConsoleError;
pub use routes::{AttachStyle, Endpoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

/// File bytes for a multipart upload. Carried by value so the transport has
/// no filesystem dependency of its own.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One fully-described call against the service.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub upload: Option<Upload>,
}

impl Request {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            upload: None,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_upload(mut self, upload: Upload) -> Self {
        self.upload = Some(upload);
        self
    }
}

/// Seam between the repositories and the wire. Production uses
/// [`HttpTransport`]; tests script responses through the same trait.
pub trait Transport {
    fn execute(&self, request: &Request) -> Result<Value, ConsoleError>;
}

/// Issue a logical operation, masking which route convention satisfies it.
///
/// A single attempt per route, no retries: the fallback fires only on an
/// endpoint-mismatch failure (404/405) from the primary, and its own failure
/// is surfaced as-is.
pub fn invoke<T: Transport>(transport: &T, endpoint: Endpoint) -> Result<Value, ConsoleError> {
    match transport.execute(&endpoint.primary) {
        Err(err) if err.is_endpoint_mismatch() => match endpoint.fallback {
            Some(fallback) => {
                warn!(
                    primary = %endpoint.primary.path,
                    fallback = %fallback.path,
                    "primary route rejected, trying fallback convention"
                );
                transport.execute(&fallback)
            }
            None => Err(err),
        },
        other => other,
    }
}

/// Blocking HTTP transport. One operator, one call at a time; each request
/// blocks until the server answers or the client's default timeout fires.
#[derive(Debug)]
pub struct HttpTransport {
    http: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout_secs: Option<u64>) -> Result<Self, ConsoleError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ConsoleError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &Request) -> Result<Value, ConsoleError> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, %url, "issuing request");

        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Delete => self.http.delete(&url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(upload) = &request.upload {
            let part = multipart::Part::bytes(upload.bytes.clone())
                .file_name(upload.file_name.clone());
            builder = builder.multipart(multipart::Form::new().part("file", part));
        }

        let response = builder.send().map_err(ConsoleError::network)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(ConsoleError::network)?;

        // The service uses 200 and 204 for success; everything else carries
        // its body as diagnostic text.
        if status != 200 && status != 204 {
            return Err(ConsoleError::from_status(status, body));
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            // A 200 with a non-JSON body still counts as success.
            Err(_) => Ok(Value::String(body)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trims_trailing_slashes() {
        let transport = HttpTransport::new("http://localhost:8283/", None).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8283");

        let transport = HttpTransport::new("http://localhost:8283", Some(5)).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8283");
    }
}
