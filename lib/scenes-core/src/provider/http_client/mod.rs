//! HTTP transport used by the Scenes client

pub mod reqwest_client;

use std::collections::HashMap;
use std::fmt::Display;
use std::panic::Location;
use std::sync::Arc;

use itertools::Itertools;
use serde::Serialize;
use serde::de::DeserializeOwned;
use strum_macros::Display;
use thiserror::Error;


#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> RequestBuilder;
    fn post(&self, url: &str) -> RequestBuilder;
    fn patch(&self, url: &str) -> RequestBuilder;
    fn delete(&self, url: &str) -> RequestBuilder;

    async fn send(&self, request: Request) -> Result<Response, Error>;
}

pub type Headers = HashMap<String, String>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub enum Method {
    #[strum(serialize = "GET")]
    Get,
    #[strum(serialize = "POST")]
    Post,
    #[strum(serialize = "PATCH")]
    Patch,
    #[strum(serialize = "DELETE")]
    Delete,
}

/// Outgoing request as handed to the transport
#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Headers,
    pub body: Vec<u8>,

    pub request: Request,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Url encoding error: {0}")]
    UrlEncode(#[from] serde_urlencoded::ser::Error),
}

impl Error {
    fn logged(self, location: &Location, request: &Request) -> Self {
        tracing::error!(method = %request.method, url = %request.url, %location, "{self}");
        self
    }
}

impl Response {
    #[track_caller]
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let location = Location::caller();
        serde_json::from_slice(&self.body)
            .map_err(|e| Error::Json(e).logged(location, &self.request))
    }
}

pub struct RequestBuilder {
    client: Arc<dyn HttpClient>,
    request: Request,
}

impl RequestBuilder {
    pub fn new(client: Arc<dyn HttpClient>, method: Method, url: &str) -> Self {
        Self {
            client,
            request: Request {
                method,
                url: url.to_owned(),
                headers: Headers::default(),
                body: None,
            },
        }
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.request.headers.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Sets `Authorization`, adding the `Bearer ` scheme unless the token already carries it
    pub fn bearer_auth(self, token: &str) -> Self {
        if token.starts_with("Bearer ") {
            self.header("Authorization", token)
        } else {
            self.header("Authorization", &format!("Bearer {token}"))
        }
    }

    /// Appends url-encoded query parameters, keeping any query already present in the url
    #[track_caller]
    pub fn query<T: Serialize>(mut self, value: T) -> Result<Self, Error> {
        let location = Location::caller();
        let query = serde_urlencoded::to_string(value)
            .map_err(|e| Error::UrlEncode(e).logged(location, &self.request))?;

        if !query.is_empty() {
            let separator = if self.request.url.contains('?') { '&' } else { '?' };
            self.request.url = format!("{}{separator}{query}", self.request.url);
        }
        Ok(self)
    }

    #[track_caller]
    pub fn json<T: Serialize>(mut self, value: T) -> Result<Self, Error> {
        let location = Location::caller();
        let body = serde_json::to_vec(&value)
            .map_err(|e| Error::Json(e).logged(location, &self.request))?;

        self.request.body = Some(body);
        Ok(self.header("Content-Type", "application/json"))
    }

    pub async fn send(self) -> Result<Response, Error> {
        let location = Location::caller();
        let request = self.request.clone();

        match self.client.send(self.request).await {
            Ok(response) => {
                tracing::debug!(method = %request.method, url = %request.url, status = %response.status, "HTTP response");
                tracing::trace!(
                    request_headers = %redacted_headers(&request.headers),
                    request_body = %printable_body(request.body.as_deref()),
                    response_headers = %redacted_headers(&response.headers),
                    response_body = %printable_body(Some(&response.body)),
                    "HTTP exchange"
                );
                Ok(response)
            }
            Err(error) => Err(error.logged(location, &request)),
        }
    }

    pub fn url(&self) -> &str {
        &self.request.url
    }
}

fn redacted_headers(headers: &Headers) -> String {
    if headers.is_empty() {
        return "<none>".to_owned();
    }

    headers
        .iter()
        .map(|(key, value)| {
            if key.eq_ignore_ascii_case("Authorization") {
                format!("{key}: <redacted>")
            } else {
                format!("{key}: {value}")
            }
        })
        .join(", ")
}

fn printable_body(body: Option<&[u8]>) -> String {
    match body {
        None => "<none>".to_owned(),
        Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}
