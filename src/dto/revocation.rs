//! Types of `/auth/revocation`

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// # RevocationRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevocationRequest {
    /// Form body received by the revocation endpoint
    pub parameters: String,
    /// Client id from the `Authorization` header
    pub client_id: Option<String>,
    /// Client secret from the `Authorization` header
    pub client_secret: Option<String>,
    /// Client certificate of the mutual TLS connection, PEM
    pub client_certificate: Option<String>,
    /// Certificate chain of the client certificate, PEM
    pub client_certificate_path: Option<Vec<String>>,
    /// `OAuth-Client-Attestation` header
    pub oauth_client_attestation: Option<String>,
    /// `OAuth-Client-Attestation-PoP` header
    pub oauth_client_attestation_pop: Option<String>,
}

impl RevocationRequest {
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
    /// What the revocation endpoint should do next
    #[derive(Default)]
    pub enum RevocationAction {
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// Return `401 Unauthorized`
        InvalidClient => "INVALID_CLIENT",
        /// Return `400 Bad Request`
        BadRequest => "BAD_REQUEST",
        /// Return `200 OK`
        Ok => "OK",
    }
}

/// # RevocationResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevocationResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the revocation endpoint
    pub action: RevocationAction,
    /// Response body
    pub response_content: Option<String>,
}

impl_api_response!(RevocationResponse);
