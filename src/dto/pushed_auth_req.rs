//! Types of `/pushed_auth_req`
//! ([RFC 9126](https://www.rfc-editor.org/rfc/rfc9126), Pushed Authorization Requests)

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::ClientAuthMethod;

/// # PushedAuthReqRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PushedAuthReqRequest {
    /// Form body received by the pushed authorization request endpoint
    pub parameters: String,
    /// Client id from the `Authorization` header
    pub client_id: Option<String>,
    /// Client secret from the `Authorization` header
    pub client_secret: Option<String>,
    /// Client certificate of the mutual TLS connection, PEM
    pub client_certificate: Option<String>,
    /// Certificate chain of the client certificate, PEM
    pub client_certificate_path: Option<Vec<String>>,
    /// `DPoP` header
    pub dpop: Option<String>,
    /// Http method of the request
    pub htm: Option<String>,
    /// Url of the endpoint
    pub htu: Option<String>,
}

impl PushedAuthReqRequest {
    /// Creates a request for the given form body
    pub fn new(parameters: impl Into<String>) -> Self {
        Self {
            parameters: parameters.into(),
            ..Default::default()
        }
    }

    /// Set the client credentials taken from Basic authentication
    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }
}

wire_enum! {
    /// What the pushed authorization request endpoint should do next
    #[derive(Default)]
    pub enum PushedAuthReqAction {
        /// Return `201 Created`
        Created => "CREATED",
        /// Return `400 Bad Request`
        BadRequest => "BAD_REQUEST",
        /// Return `401 Unauthorized`
        Unauthorized => "UNAUTHORIZED",
        /// Return `403 Forbidden`
        Forbidden => "FORBIDDEN",
        /// Return `413 Payload Too Large`
        PayloadTooLarge => "PAYLOAD_TOO_LARGE",
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
    }
}

/// # PushedAuthReqResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PushedAuthReqResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the endpoint
    pub action: PushedAuthReqAction,
    /// Response body
    pub response_content: Option<String>,
    /// Client authentication method used
    pub client_auth_method: Option<ClientAuthMethod>,
    /// Issued `request_uri`
    pub request_uri: Option<String>,
    /// Value for the `DPoP-Nonce` response header
    pub dpop_nonce: Option<String>,
}

impl_api_response!(PushedAuthReqResponse);
