//! Network transport used by the gateway
//!
//! The gateway talks to the network through the [`Transport`] trait so the
//! caching and timeout logic can be exercised without real HTTP.

use std::collections::BTreeMap;
use std::future::Future;

use reqwest::Client;
use serde::Serialize;

use super::FetchError;

/// HTTP method of a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Options attached to a request
///
/// Headers live in a `BTreeMap` so that serialization is ordered and two
/// equal option sets always produce the same fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestOptions {
    /// HTTP method, `GET` unless set
    pub method: HttpMethod,
    /// Request headers
    pub headers: BTreeMap<String, String>,
    /// Optional request body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl RequestOptions {
    /// Options for a plain `GET`
    pub fn get() -> Self {
        Self::default()
    }

    /// Sets the HTTP method
    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Adds a header, replacing any previous value for the same name
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the request body
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A completed HTTP exchange: status code and raw body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single request and returns the raw response
///
/// Implementations report transport failures as [`FetchError::Network`].
/// Status codes are not interpreted here.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> impl Future<Output = Result<RawResponse, FetchError>> + Send;
}

/// [`Transport`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, url: &str, options: &RequestOptions) -> Result<RawResponse, FetchError> {
        let mut request = self.client.request(options.method.as_reqwest(), url);
        for (name, value) in &options.headers {
            request = request.header(name, value);
        }
        if let Some(body) = &options.body {
            request = request.body(body.clone());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory transport for exercising the gateway without a network

    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    /// What the stub does when a URL is requested
    #[derive(Debug, Clone)]
    pub enum StubReply {
        /// Answer with the given response
        Respond(RawResponse),
        /// Fail at the transport level
        Fail(String),
        /// Sleep before answering; used to trip the gateway timeout
        Hang(Duration, RawResponse),
    }

    /// Transport that answers from a route table and records every call
    #[derive(Debug, Default)]
    pub struct StubTransport {
        routes: Mutex<HashMap<String, StubReply>>,
        calls: Mutex<Vec<String>>,
    }

    impl StubTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Registers (or replaces) the reply for a URL
        pub fn route(&self, url: &str, reply: StubReply) {
            self.routes.lock().unwrap().insert(url.to_string(), reply);
        }

        /// Shorthand for a JSON reply with the given status
        pub fn respond(&self, url: &str, status: u16, body: &str) {
            self.route(url, StubReply::Respond(RawResponse::new(status, body)));
        }

        /// Total number of requests sent
        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        /// Number of requests sent to one URL
        pub fn calls_to(&self, url: &str) -> usize {
            self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
        }
    }

    impl Transport for StubTransport {
        async fn send(
            &self,
            url: &str,
            _options: &RequestOptions,
        ) -> Result<RawResponse, FetchError> {
            self.calls.lock().unwrap().push(url.to_string());
            let reply = self.routes.lock().unwrap().get(url).cloned();

            match reply {
                Some(StubReply::Respond(response)) => Ok(response),
                Some(StubReply::Fail(message)) => Err(FetchError::Network(message)),
                Some(StubReply::Hang(delay, response)) => {
                    tokio::time::sleep(delay).await;
                    Ok(response)
                }
                None => Err(FetchError::Network(format!("no route for {}", url))),
            }
        }
    }
}
