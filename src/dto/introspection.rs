//! Types of `/auth/introspection` and `/auth/introspection/standard`
//!
//! [IntrospectionRequest] is what a resource server calls to validate an
//! access token it received. [StandardIntrospectionRequest] backs an
//! [RFC 7662](https://www.rfc-editor.org/rfc/rfc7662) introspection endpoint.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{AuthzDetails, Grant, GrantType, Pair, Property};

/// # IntrospectionRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntrospectionRequest {
    /// Access token to introspect
    pub token: String,
    /// Scopes the access token must cover
    pub scopes: Option<Vec<String>>,
    /// Subject the access token must belong to
    pub subject: Option<String>,
    /// Client certificate of the mutual TLS connection, PEM
    pub client_certificate: Option<String>,
    /// `DPoP` header
    pub dpop: Option<String>,
    /// Http method of the resource request
    pub htm: Option<String>,
    /// Url of the resource request
    pub htu: Option<String>,
    /// Resources the access token must be bound to
    pub resources: Option<Vec<String>>,
    /// ACRs one of which the user must have been authenticated with
    pub acr_values: Option<Vec<String>>,
    /// Maximum age of the authentication in seconds, 0 for no check
    pub max_age: i32,
    /// Full url of the resource request, for http message signatures
    pub uri: Option<String>,
    /// Message of the resource request, for http message signatures
    pub message: Option<String>,
    /// Headers of the resource request
    pub headers: Option<Vec<Pair>>,
    /// Target uri of the resource request
    pub target_uri: Option<String>,
    /// Whether a DPoP proof must carry a server nonce
    pub dpop_nonce_required: bool,
}

impl IntrospectionRequest {
    /// Creates a request for the given access token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    /// Set the scopes the access token must cover
    pub fn set_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Set the DPoP proof and the values it is verified against
    pub fn with_dpop(
        mut self,
        dpop: impl Into<String>,
        htm: impl Into<String>,
        htu: impl Into<String>,
    ) -> Self {
        self.dpop = Some(dpop.into());
        self.htm = Some(htm.into());
        self.htu = Some(htu.into());
        self
    }
}

wire_enum! {
    /// What the resource server should do next
    #[derive(Default)]
    pub enum IntrospectionAction {
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// Return `400 Bad Request`
        BadRequest => "BAD_REQUEST",
        /// Return `401 Unauthorized`
        Unauthorized => "UNAUTHORIZED",
        /// Return `403 Forbidden`
        Forbidden => "FORBIDDEN",
        /// The access token is valid, serve the resource
        Ok => "OK",
    }
}

/// # IntrospectionResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntrospectionResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the resource server
    pub action: IntrospectionAction,
    /// Value for the `WWW-Authenticate` header on error
    pub response_content: Option<String>,
    /// Client id
    pub client_id: i64,
    /// Client id alias
    pub client_id_alias: Option<String>,
    /// Whether the client id alias was used
    pub client_id_alias_used: bool,
    /// Access token expiry, milliseconds since the epoch
    pub expires_at: i64,
    /// Subject of the user
    pub subject: Option<String>,
    /// Scopes of the access token
    pub scopes: Option<Vec<String>>,
    /// Whether the access token exists
    pub existent: bool,
    /// Whether the access token exists and has not expired
    pub usable: bool,
    /// Whether the access token covers the requested scopes
    pub sufficient: bool,
    /// Whether a refresh token is associated with the access token
    pub refreshable: bool,
    /// Properties attached to the access token
    pub properties: Option<Vec<Property>>,
    /// Thumbprint of the bound client certificate
    pub certificate_thumbprint: Option<String>,
    /// Requested resources
    pub resources: Option<Vec<String>>,
    /// Resources the access token is bound to
    pub access_token_resources: Option<Vec<String>>,
    /// Authorization details
    pub authorization_details: Option<AuthzDetails>,
    /// Attributes of the service
    pub service_attributes: Option<Vec<Pair>>,
    /// Attributes of the client
    pub client_attributes: Option<Vec<Pair>>,
    /// Grant id
    pub grant_id: Option<String>,
    /// Grant referenced by the grant id
    pub grant: Option<Grant>,
    /// Claims the user consented to
    pub consented_claims: Option<Vec<String>>,
    /// Grant type the access token was issued with
    pub grant_type: Option<GrantType>,
    /// Whether the access token is for an external attachment
    pub for_external_attachment: bool,
    /// ACR the user was authenticated with
    pub acr: Option<String>,
    /// Authentication time, seconds since the epoch
    pub auth_time: i64,
    /// Value for the `DPoP-Nonce` response header
    pub dpop_nonce: Option<String>,
}

/// # StandardIntrospectionRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StandardIntrospectionRequest {
    /// Form body received by the introspection endpoint
    pub parameters: String,
    /// Whether hidden properties are included in the response
    pub with_hidden_properties: bool,
    /// Url of the resource server, the `aud` of a JWT response
    pub rs_uri: Option<String>,
    /// `Accept` header of the introspection request
    pub http_accept_header: Option<String>,
    /// JWS algorithm of a JWT response
    pub introspection_sign_alg: Option<String>,
    /// JWE algorithm of a JWT response
    pub introspection_encryption_alg: Option<String>,
    /// JWE encryption of a JWT response
    pub introspection_encryption_enc: Option<String>,
    /// Shared key for HMAC signing
    pub shared_key_for_sign: Option<String>,
    /// Shared key for symmetric encryption
    pub shared_key_for_encryption: Option<String>,
    /// Public key for asymmetric encryption, JWK
    pub public_key_for_encryption: Option<String>,
}

impl StandardIntrospectionRequest {
    /// Creates a request for the given form body
    pub fn new(parameters: impl Into<String>) -> Self {
        Self {
            parameters: parameters.into(),
            ..Default::default()
        }
    }
}

wire_enum! {
    /// What the introspection endpoint should do next
    #[derive(Default)]
    pub enum StandardIntrospectionAction {
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// Return `400 Bad Request`
        BadRequest => "BAD_REQUEST",
        /// Return `200 OK` with the JSON in `responseContent`
        Ok => "OK",
        /// Return `200 OK` with the JWT in `responseContent`
        Jwt => "JWT",
    }
}

/// # StandardIntrospectionResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StandardIntrospectionResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the introspection endpoint
    pub action: StandardIntrospectionAction,
    /// Response body
    pub response_content: Option<String>,
}

impl_api_response!(IntrospectionResponse, StandardIntrospectionResponse);
