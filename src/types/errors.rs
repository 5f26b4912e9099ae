use serde::Deserialize;
use thiserror::Error;

use super::http_client::HttpResponse;

/// # ApiErrorBody
/// Body the Authlete API returns together with a non-2xx status.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiErrorBody {
    /// Result code, e.g. `A001101`
    pub result_code: Option<String>,
    /// Human readable result message
    pub result_message: Option<String>,
}

/// # AuthleteError
/// Error that will be returned to the user of this library
#[derive(Debug, Error)]
pub enum AuthleteError {
    /// The http client could not complete the request
    #[error("http request failed: {0}")]
    Http(String),

    /// A request or response body could not be (de)serialized
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured base url or a derived endpoint is not a valid url
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The configuration is missing a value needed for the call
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The Authlete API answered with a non-2xx status
    #[error(
        "Authlete API returned {status_code}: {}",
        result_message.as_deref().unwrap_or("no message")
    )]
    Api {
        /// Http status code of the reply
        status_code: u16,
        /// `resultCode` of the reply body, if it could be read
        result_code: Option<String>,
        /// `resultMessage` of the reply body, if it could be read
        result_message: Option<String>,
        /// The raw response
        response: HttpResponse,
    },
}

impl AuthleteError {
    /// Builds an [AuthleteError::Api] out of a failed response, reading the
    /// result code and message from the body when it is Authlete's error json.
    pub(crate) fn from_response(response: HttpResponse) -> Self {
        let body = response
            .body
            .as_deref()
            .and_then(|b| serde_json::from_str::<ApiErrorBody>(b).ok())
            .unwrap_or_default();

        Self::Api {
            status_code: response.status_code,
            result_code: body.result_code,
            result_message: body.result_message,
            response,
        }
    }

    /// Result code reported by the service, if any
    pub fn result_code(&self) -> Option<&str> {
        match self {
            Self::Api { result_code, .. } => result_code.as_deref(),
            _ => None,
        }
    }
}

/// Returned when parsing a string that is not one of an enum's wire tokens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {type_name} value: {value:?}")]
pub struct UnknownVariantError {
    /// Name of the enum that was parsed
    pub type_name: &'static str,
    /// The rejected input
    pub value: String,
}
