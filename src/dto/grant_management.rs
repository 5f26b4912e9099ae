//! Types of `/gm`
//! ([Grant Management for OAuth 2.0](https://openid.net/specs/fapi-grant-management.html))

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::GmAction;

/// # GmRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GmRequest {
    /// Access token presented to the grant management endpoint
    pub access_token: String,
    /// Client certificate of the mutual TLS connection, PEM
    pub client_certificate: Option<String>,
    /// `DPoP` header
    pub dpop: Option<String>,
    /// Http method of the request
    pub htm: Option<String>,
    /// Url of the endpoint
    pub htu: Option<String>,
    /// `QUERY` for GET, `REVOKE` for DELETE
    pub gm_action: GmAction,
    /// Grant id taken from the request path
    pub grant_id: Option<String>,
    /// Whether a DPoP proof must carry a server nonce
    pub dpop_nonce_required: bool,
}

impl GmRequest {
    /// Creates a request acting on the given grant
    pub fn new(
        access_token: impl Into<String>,
        gm_action: GmAction,
        grant_id: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            gm_action,
            grant_id: Some(grant_id.into()),
            ..Default::default()
        }
    }
}

wire_enum! {
    /// What the grant management endpoint should do next
    #[derive(Default)]
    pub enum GmResultAction {
        /// Return `200 OK` with `responseContent`
        Ok => "OK",
        /// Return `204 No Content`
        NoContent => "NO_CONTENT",
        /// Return `401 Unauthorized`
        Unauthorized => "UNAUTHORIZED",
        /// Return `403 Forbidden`
        Forbidden => "FORBIDDEN",
        /// Return `404 Not Found`
        NotFound => "NOT_FOUND",
        /// The call to `/gm` was malformed, return `500 Internal Server Error`
        CallerError => "CALLER_ERROR",
        /// Something went wrong on the service, return `500 Internal Server Error`
        #[default]
        AuthleteError => "AUTHLETE_ERROR",
    }
}

/// # GmResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GmResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the endpoint
    pub action: GmResultAction,
    /// Response body, or `WWW-Authenticate` value on error
    pub response_content: Option<String>,
    /// Value for the `DPoP-Nonce` response header
    pub dpop_nonce: Option<String>,
}

impl_api_response!(GmResponse);
