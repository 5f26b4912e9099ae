//! Types of `/auth/token/create` and `/auth/token/update`
//!
//! These create and modify access tokens directly, outside of any OAuth flow.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{AuthzDetails, GrantType, Property};

/// # TokenCreateRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenCreateRequest {
    /// Grant type the token is treated as issued with
    pub grant_type: Option<GrantType>,
    /// Client the token is issued to
    pub client_id: i64,
    /// Subject of the user, not used for `CLIENT_CREDENTIALS`
    pub subject: Option<String>,
    /// Scopes of the token
    pub scopes: Option<Vec<String>>,
    /// Access token duration in seconds, 0 for the default
    pub access_token_duration: i64,
    /// Refresh token duration in seconds, 0 for the default
    pub refresh_token_duration: i64,
    /// Properties to attach to the token
    pub properties: Option<Vec<Property>>,
    /// Whether the client id alias is reported as used
    pub client_id_alias_used: bool,
    /// Access token value to use instead of a generated one
    pub access_token: Option<String>,
    /// Refresh token value to use instead of a generated one
    pub refresh_token: Option<String>,
    /// Whether the access token never expires
    pub access_token_persistent: bool,
    /// Thumbprint of the client certificate to bind to
    pub certificate_thumbprint: Option<String>,
    /// Thumbprint of the DPoP key to bind to
    pub dpop_key_thumbprint: Option<String>,
    /// Authorization details
    pub authorization_details: Option<AuthzDetails>,
    /// Resources the token is bound to
    pub resources: Option<Vec<String>>,
    /// Whether the token is for an external attachment
    pub for_external_attachment: bool,
    /// Extra claims of a JWT access token, JSON object
    pub jwt_at_claims: Option<String>,
    /// ACR the user was authenticated with
    pub acr: Option<String>,
    /// Authentication time, seconds since the epoch
    pub auth_time: i64,
}

impl TokenCreateRequest {
    /// Creates a request for a token of the given grant type and client
    pub fn new(grant_type: GrantType, client_id: i64) -> Self {
        Self {
            grant_type: Some(grant_type),
            client_id,
            ..Default::default()
        }
    }

    /// Set the subject of the user
    pub fn set_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the scopes of the token
    pub fn set_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }
}

wire_enum! {
    /// Result of a token creation
    #[derive(Default)]
    pub enum TokenCreateAction {
        /// Something went wrong on the service
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// The request was malformed
        BadRequest => "BAD_REQUEST",
        /// The request was not allowed
        Forbidden => "FORBIDDEN",
        /// The token was created
        Ok => "OK",
    }
}

/// # TokenCreateResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenCreateResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Result of the creation
    pub action: TokenCreateAction,
    /// Created access token
    pub access_token: Option<String>,
    /// Client id
    pub client_id: i64,
    /// Access token expiry, milliseconds since the epoch
    pub expires_at: i64,
    /// Access token duration in seconds
    pub expires_in: i64,
    /// Grant type
    pub grant_type: Option<GrantType>,
    /// Properties attached to the token
    pub properties: Option<Vec<Property>>,
    /// Created refresh token
    pub refresh_token: Option<String>,
    /// Scopes of the token
    pub scopes: Option<Vec<String>>,
    /// Subject of the user
    pub subject: Option<String>,
    /// Token type, e.g. `Bearer` or `DPoP`
    pub token_type: Option<String>,
    /// Access token in JWT format
    pub jwt_access_token: Option<String>,
    /// Authorization details
    pub authorization_details: Option<AuthzDetails>,
    /// Whether the token is for an external attachment
    pub for_external_attachment: bool,
    /// Unique token identifier
    pub token_id: Option<String>,
    /// Refresh token expiry, milliseconds since the epoch
    pub refresh_token_expires_at: i64,
}

/// # TokenUpdateRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenUpdateRequest {
    /// Access token to update
    pub access_token: String,
    /// New expiry, milliseconds since the epoch, 0 to keep
    pub access_token_expires_at: i64,
    /// New scopes
    pub scopes: Option<Vec<String>>,
    /// New properties
    pub properties: Option<Vec<Property>>,
    /// Whether a scope update also recomputes the access token expiry
    pub access_token_expires_at_updated_on_scope_update: bool,
    /// Whether the access token never expires
    pub access_token_persistent: bool,
    /// Hash of the access token, used instead of its value
    pub access_token_hash: Option<String>,
    /// Whether a new access token value is generated
    pub access_token_value_updated: bool,
    /// Thumbprint of the client certificate to bind to
    pub certificate_thumbprint: Option<String>,
    /// Thumbprint of the DPoP key to bind to
    pub dpop_key_thumbprint: Option<String>,
    /// New authorization details
    pub authorization_details: Option<AuthzDetails>,
    /// Whether the token is for an external attachment
    pub for_external_attachment: bool,
    /// Unique token identifier
    pub token_id: Option<String>,
    /// Whether a scope update also recomputes the refresh token expiry
    pub refresh_token_expires_at_updated_on_scope_update: bool,
}

impl TokenUpdateRequest {
    /// Creates a request for the given access token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Default::default()
        }
    }
}

wire_enum! {
    /// Result of a token update
    #[derive(Default)]
    pub enum TokenUpdateAction {
        /// Something went wrong on the service
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// The request was malformed
        BadRequest => "BAD_REQUEST",
        /// The request was not allowed
        Forbidden => "FORBIDDEN",
        /// The access token does not exist
        NotFound => "NOT_FOUND",
        /// The token was updated
        Ok => "OK",
    }
}

/// # TokenUpdateResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenUpdateResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Result of the update
    pub action: TokenUpdateAction,
    /// The access token
    pub access_token: Option<String>,
    /// Access token expiry, milliseconds since the epoch
    pub access_token_expires_at: i64,
    /// Properties attached to the token
    pub properties: Option<Vec<Property>>,
    /// Scopes of the token
    pub scopes: Option<Vec<String>>,
    /// Authorization details
    pub authorization_details: Option<AuthzDetails>,
    /// Token type, e.g. `Bearer` or `DPoP`
    pub token_type: Option<String>,
    /// Whether the token is for an external attachment
    pub for_external_attachment: bool,
    /// Unique token identifier
    pub token_id: Option<String>,
    /// Refresh token expiry, milliseconds since the epoch
    pub refresh_token_expires_at: i64,
}

impl_api_response!(TokenCreateResponse, TokenUpdateResponse);
