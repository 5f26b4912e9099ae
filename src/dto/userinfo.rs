//! Types of `/auth/userinfo` and `/auth/userinfo/issue`

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::common::{Pair, Property};

/// # UserInfoRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfoRequest {
    /// Access token presented to the userinfo endpoint
    pub token: String,
    /// Client certificate of the mutual TLS connection, PEM
    pub client_certificate: Option<String>,
    /// `DPoP` header
    pub dpop: Option<String>,
    /// Http method of the userinfo request
    pub htm: Option<String>,
    /// Url of the userinfo endpoint
    pub htu: Option<String>,
    /// Full url of the userinfo request, for http message signatures
    pub uri: Option<String>,
    /// Message of the userinfo request, for http message signatures
    pub message: Option<String>,
    /// Headers of the userinfo request
    pub headers: Option<Vec<Pair>>,
    /// Whether the userinfo request had a body
    pub request_body_contained: bool,
    /// Whether a DPoP proof must carry a server nonce
    pub dpop_nonce_required: bool,
}

impl UserInfoRequest {
    /// Creates a request for the given access token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }
}

wire_enum! {
    /// What the userinfo endpoint should do next
    #[derive(Default)]
    pub enum UserInfoAction {
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// Return `400 Bad Request`
        BadRequest => "BAD_REQUEST",
        /// Return `401 Unauthorized`
        Unauthorized => "UNAUTHORIZED",
        /// Return `403 Forbidden`
        Forbidden => "FORBIDDEN",
        /// Collect the claims and call `/auth/userinfo/issue`
        Ok => "OK",
    }
}

/// # UserInfoResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfoResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the userinfo endpoint
    pub action: UserInfoAction,
    /// Value for the `WWW-Authenticate` header on error
    pub response_content: Option<String>,
    /// Client id
    pub client_id: i64,
    /// Client id alias
    pub client_id_alias: Option<String>,
    /// Whether the client id alias was used
    pub client_id_alias_used: bool,
    /// Subject of the user
    pub subject: Option<String>,
    /// Scopes of the access token
    pub scopes: Option<Vec<String>>,
    /// Claims the client requested
    pub claims: Option<Vec<String>>,
    /// The access token
    pub token: Option<String>,
    /// Properties attached to the access token
    pub properties: Option<Vec<Property>>,
    /// `userinfo` member of the `claims` request parameter, JSON
    pub user_info_claims: Option<String>,
    /// Attributes of the service
    pub service_attributes: Option<Vec<Pair>>,
    /// Attributes of the client
    pub client_attributes: Option<Vec<Pair>>,
    /// Claims the user consented to
    pub consented_claims: Option<Vec<String>>,
    /// Transformed claims requested
    pub requested_claims_for_tx: Option<Vec<String>>,
    /// Transformed claims requested inside `verified_claims`
    pub requested_verified_claims_for_tx: Option<Vec<Vec<String>>>,
    /// Definitions of transformed claims, JSON
    pub transformed_claims: Option<String>,
    /// Value for the `DPoP-Nonce` response header
    pub dpop_nonce: Option<String>,
}

/// # UserInfoIssueRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfoIssueRequest {
    /// Access token presented to the userinfo endpoint
    pub token: String,
    /// Claims of the user, JSON object
    pub claims: Option<String>,
    /// Value of the `sub` claim, when it differs from the subject
    pub sub: Option<String>,
    /// Values to compute transformed claims from, JSON object
    pub claims_for_tx: Option<String>,
    /// Values to compute transformed claims in `verified_claims` from
    pub verified_claims_for_tx: Option<Vec<String>>,
}

impl UserInfoIssueRequest {
    /// Creates a request for the given access token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    /// Set the claims from a JSON object
    pub fn set_claims(mut self, claims: &Value) -> Self {
        self.claims = Some(claims.to_string());
        self
    }
}

wire_enum! {
    /// What the userinfo endpoint should do with the issue result
    #[derive(Default)]
    pub enum UserInfoIssueAction {
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// Return `400 Bad Request`
        BadRequest => "BAD_REQUEST",
        /// Return `401 Unauthorized`
        Unauthorized => "UNAUTHORIZED",
        /// Return `403 Forbidden`
        Forbidden => "FORBIDDEN",
        /// Return `200 OK` with `application/json`
        Json => "JSON",
        /// Return `200 OK` with `application/jwt`
        Jwt => "JWT",
    }
}

/// # UserInfoIssueResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfoIssueResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the userinfo endpoint
    pub action: UserInfoIssueAction,
    /// Response body, or `WWW-Authenticate` value on error
    pub response_content: Option<String>,
    /// `Signature` header of a signed response
    pub signature: Option<String>,
    /// `Signature-Input` header of a signed response
    pub signature_input: Option<String>,
    /// `Content-Digest` header of a signed response
    pub content_digest: Option<String>,
}

impl_api_response!(UserInfoResponse, UserInfoIssueResponse);
