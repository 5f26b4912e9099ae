//! Types of `/auth/token`, `/auth/token/issue` and `/auth/token/fail`
//!
//! The token endpoint forwards its form body to `/auth/token`. For the
//! resource owner password grant ([TokenAction::Password]) the endpoint checks
//! the credentials itself and finishes with [TokenIssueRequest] or
//! [TokenFailRequest].

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{AuthzDetails, ClientAuthMethod, GrantType, Pair, Property};

/// # TokenRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenRequest {
    /// Form body received by the token endpoint
    pub parameters: String,
    /// Client id from the `Authorization` header
    pub client_id: Option<String>,
    /// Client secret from the `Authorization` header
    pub client_secret: Option<String>,
    /// Client certificate of the mutual TLS connection, PEM
    pub client_certificate: Option<String>,
    /// Certificate chain of the client certificate, PEM
    pub client_certificate_path: Option<Vec<String>>,
    /// Properties to attach to the access token
    pub properties: Option<Vec<Property>>,
    /// `DPoP` header
    pub dpop: Option<String>,
    /// Http method of the token request, for DPoP verification
    pub htm: Option<String>,
    /// Url of the token endpoint, for DPoP verification
    pub htu: Option<String>,
    /// Access token value to use instead of a generated one
    pub access_token: Option<String>,
    /// Extra claims of a JWT access token, JSON object
    pub jwt_at_claims: Option<String>,
    /// Access token duration in seconds, 0 for the default
    pub access_token_duration: i64,
    /// Refresh token duration in seconds, 0 for the default
    pub refresh_token_duration: i64,
    /// Whether a DPoP proof must carry a server nonce
    pub dpop_nonce_required: bool,
    /// `OAuth-Client-Attestation` header
    pub oauth_client_attestation: Option<String>,
    /// `OAuth-Client-Attestation-PoP` header
    pub oauth_client_attestation_pop: Option<String>,
}

impl TokenRequest {
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
    /// What the token endpoint should do next
    #[derive(Default)]
    pub enum TokenAction {
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// Return `401 Unauthorized`
        InvalidClient => "INVALID_CLIENT",
        /// Return `400 Bad Request`
        BadRequest => "BAD_REQUEST",
        /// Check `username` / `password`, then call issue or fail
        Password => "PASSWORD",
        /// Return `200 OK` with `responseContent`
        Ok => "OK",
        /// Handle the token exchange request
        TokenExchange => "TOKEN_EXCHANGE",
        /// Handle the JWT authorization grant
        JwtBearer => "JWT_BEARER",
    }
}

/// # TokenResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the token endpoint
    pub action: TokenAction,
    /// Response body
    pub response_content: Option<String>,
    /// `username` of a password grant
    pub username: Option<String>,
    /// `password` of a password grant
    pub password: Option<String>,
    /// Ticket for the issue / fail call
    pub ticket: Option<String>,
    /// Issued access token
    pub access_token: Option<String>,
    /// Access token expiry, milliseconds since the epoch
    pub access_token_expires_at: i64,
    /// Access token duration in seconds
    pub access_token_duration: i64,
    /// Issued refresh token
    pub refresh_token: Option<String>,
    /// Refresh token expiry, milliseconds since the epoch
    pub refresh_token_expires_at: i64,
    /// Refresh token duration in seconds
    pub refresh_token_duration: i64,
    /// Issued ID token
    pub id_token: Option<String>,
    /// Grant type of the request
    pub grant_type: Option<GrantType>,
    /// Client id
    pub client_id: i64,
    /// Client id alias
    pub client_id_alias: Option<String>,
    /// Whether the client id alias was used
    pub client_id_alias_used: bool,
    /// Client authentication method used
    pub client_auth_method: Option<ClientAuthMethod>,
    /// Subject of the user
    pub subject: Option<String>,
    /// Granted scopes
    pub scopes: Option<Vec<String>>,
    /// Properties attached to the access token
    pub properties: Option<Vec<Property>>,
    /// Access token in JWT format
    pub jwt_access_token: Option<String>,
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
    /// `audience` of a token exchange request
    pub audiences: Option<Vec<String>>,
    /// `requested_token_type` of a token exchange request
    pub requested_token_type: Option<String>,
    /// `subject_token` of a token exchange request
    pub subject_token: Option<String>,
    /// `subject_token_type` of a token exchange request
    pub subject_token_type: Option<String>,
    /// `actor_token` of a token exchange request
    pub actor_token: Option<String>,
    /// `actor_token_type` of a token exchange request
    pub actor_token_type: Option<String>,
    /// `assertion` of a JWT authorization grant
    pub assertion: Option<String>,
    /// Whether the refresh token used was the previous one
    pub previous_refresh_token_used: bool,
    /// Value for the `DPoP-Nonce` response header
    pub dpop_nonce: Option<String>,
}

/// # TokenIssueRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenIssueRequest {
    /// Ticket of the [TokenResponse]
    pub ticket: String,
    /// Subject of the authenticated resource owner
    pub subject: String,
    /// Properties to attach to the access token
    pub properties: Option<Vec<Property>>,
    /// Extra claims of a JWT access token, JSON object
    pub jwt_at_claims: Option<String>,
    /// Access token value to use instead of a generated one
    pub access_token: Option<String>,
    /// Access token duration in seconds, 0 for the default
    pub access_token_duration: i64,
    /// Refresh token duration in seconds, 0 for the default
    pub refresh_token_duration: i64,
}

impl TokenIssueRequest {
    /// Creates a request for the ticket and the authenticated subject
    pub fn new(ticket: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            ticket: ticket.into(),
            subject: subject.into(),
            ..Default::default()
        }
    }

    /// Add a property to attach to the access token
    pub fn add_property(mut self, property: Property) -> Self {
        self.properties.get_or_insert_with(Vec::new).push(property);
        self
    }
}

wire_enum! {
    /// What the token endpoint should do with the issue result
    #[derive(Default)]
    pub enum TokenIssueAction {
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// The ticket was not valid, return `500 Internal Server Error`
        InvalidTicket => "INVALID_TICKET",
        /// Return `200 OK`
        Ok => "OK",
    }
}

/// # TokenIssueResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenIssueResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the token endpoint
    pub action: TokenIssueAction,
    /// Response body
    pub response_content: Option<String>,
    /// Issued access token
    pub access_token: Option<String>,
    /// Access token expiry, milliseconds since the epoch
    pub access_token_expires_at: i64,
    /// Access token duration in seconds
    pub access_token_duration: i64,
    /// Issued refresh token
    pub refresh_token: Option<String>,
    /// Refresh token expiry, milliseconds since the epoch
    pub refresh_token_expires_at: i64,
    /// Refresh token duration in seconds
    pub refresh_token_duration: i64,
    /// Client id
    pub client_id: i64,
    /// Client id alias
    pub client_id_alias: Option<String>,
    /// Whether the client id alias was used
    pub client_id_alias_used: bool,
    /// Subject of the resource owner
    pub subject: Option<String>,
    /// Granted scopes
    pub scopes: Option<Vec<String>>,
    /// Properties attached to the access token
    pub properties: Option<Vec<Property>>,
    /// Access token in JWT format
    pub jwt_access_token: Option<String>,
    /// Resources the access token is bound to
    pub access_token_resources: Option<Vec<String>>,
    /// Authorization details
    pub authorization_details: Option<AuthzDetails>,
    /// Attributes of the service
    pub service_attributes: Option<Vec<Pair>>,
    /// Attributes of the client
    pub client_attributes: Option<Vec<Pair>>,
}

wire_enum! {
    /// Why the token request failed
    #[derive(Default)]
    pub enum TokenFailReason {
        /// Unknown reason
        #[default]
        Unknown => "UNKNOWN",
        /// `username` / `password` are wrong
        InvalidResourceOwnerCredentials => "INVALID_RESOURCE_OWNER_CREDENTIALS",
        /// A requested resource is not acceptable
        InvalidTarget => "INVALID_TARGET",
    }
}

/// # TokenFailRequest
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenFailRequest {
    /// Ticket of the [TokenResponse]
    pub ticket: String,
    /// Failure reason
    pub reason: TokenFailReason,
}

impl TokenFailRequest {
    /// Creates a request for the ticket and reason
    pub fn new(ticket: impl Into<String>, reason: TokenFailReason) -> Self {
        Self {
            ticket: ticket.into(),
            reason,
        }
    }
}

wire_enum! {
    /// What the token endpoint should do with the fail result
    #[derive(Default)]
    pub enum TokenFailAction {
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// Return `400 Bad Request`
        BadRequest => "BAD_REQUEST",
    }
}

/// # TokenFailResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenFailResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the token endpoint
    pub action: TokenFailAction,
    /// Response body
    pub response_content: Option<String>,
}

impl_api_response!(TokenResponse, TokenIssueResponse, TokenFailResponse);
