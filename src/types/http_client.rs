//! # Http Client Interface for Custom Http Clients

use std::collections::HashMap;

use url::Url;

/// The Http methods the Authlete API is called with
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Used by the metadata endpoints (`/service/configuration`, `/service/jwks/get`)
    #[default]
    GET,
    /// Used by every endpoint that takes a request body
    POST,
}

/// # HttpRequest
/// A single call to the Authlete API, ready to be sent by an [AuthleteHttpClient].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Url of the request, query included
    pub url: Url,
    /// Http method of the request
    pub method: HttpMethod,
    /// Headers that are sent in the request
    pub headers: HashMap<String, Vec<String>>,
    /// The request body to be sent
    pub body: Option<String>,
}

impl HttpRequest {
    pub(crate) fn new(url: Url) -> Self {
        Self {
            url,
            method: HttpMethod::GET,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub(crate) fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub(crate) fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    pub(crate) fn json(mut self, json: String) -> Self {
        self.headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        );
        self.body = Some(json);
        self
    }
}

/// Represents an HTTP response received from the Authlete API.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code of the response (e.g., 200 for success, 400 for Bad Request).
    pub status_code: u16,
    /// The content type header
    pub content_type: Option<String>,
    /// The optional body content of the response. None if there is no body content.
    pub body: Option<String>,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// This trait defines the interface for making HTTP requests used by [crate::api::AuthleteApi].
/// Users who need custom HTTP clients need to implement this trait.
pub trait AuthleteHttpClient {
    /// Makes an HTTP request using the provided HttpRequest object.
    ///
    ///  * On success, the result is `Ok(HttpResponse)` containing the HTTP response,
    ///    whatever its status code.
    ///  * On error, the result is `Err(String)` with an error message describing the
    ///    transport failure.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, String>> + Send;
}
