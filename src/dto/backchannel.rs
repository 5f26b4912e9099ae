//! Types of the `/backchannel/authentication` family
//! ([CIBA](https://openid.net/specs/openid-client-initiated-backchannel-authentication-core-1_0.html))
//!
//! 1. `/backchannel/authentication` parses the request and tells the endpoint
//!    to identify the user ([BackchannelAuthenticationAction::UserIdentification]).
//! 2. `/backchannel/authentication/issue` issues the `auth_req_id`, or
//!    `/backchannel/authentication/fail` rejects the request.
//! 3. Once the user has been asked on the authentication device,
//!    `/backchannel/authentication/complete` reports the outcome.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::common::{
    AuthzDetails, ClientAuthMethod, DeliveryMode, DynamicScope, GmAction, Grant, Pair, Property,
    Scope, UserIdentificationHintType,
};

/// # BackchannelAuthenticationRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationRequest {
    /// Form body received by the backchannel authentication endpoint
    pub parameters: String,
    /// Client id from the `Authorization` header
    pub client_id: Option<String>,
    /// Client secret from the `Authorization` header
    pub client_secret: Option<String>,
    /// Client certificate of the mutual TLS connection, PEM
    pub client_certificate: Option<String>,
    /// Certificate chain of the client certificate, PEM
    pub client_certificate_path: Option<Vec<String>>,
}

impl BackchannelAuthenticationRequest {
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
    /// What the backchannel authentication endpoint should do next
    #[derive(Default)]
    pub enum BackchannelAuthenticationAction {
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// Return `401 Unauthorized`
        Unauthorized => "UNAUTHORIZED",
        /// Return `400 Bad Request`
        BadRequest => "BAD_REQUEST",
        /// Identify the user from `hint`, then call issue or fail
        UserIdentification => "USER_IDENTIFICATION",
    }
}

/// # BackchannelAuthenticationResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the endpoint
    pub action: BackchannelAuthenticationAction,
    /// Response body
    pub response_content: Option<String>,
    /// Client id
    pub client_id: i64,
    /// Client id alias
    pub client_id_alias: Option<String>,
    /// Whether the client id alias was used
    pub client_id_alias_used: bool,
    /// Client name
    pub client_name: Option<String>,
    /// Client authentication method used
    pub client_auth_method: Option<ClientAuthMethod>,
    /// Token delivery mode of the client
    pub delivery_mode: Option<DeliveryMode>,
    /// Requested scopes
    pub scopes: Option<Vec<Scope>>,
    /// Requested dynamic scopes
    pub dynamic_scopes: Option<Vec<DynamicScope>>,
    /// Claims requested through scopes
    pub claim_names: Option<Vec<String>>,
    /// `client_notification_token`
    pub client_notification_token: Option<String>,
    /// Requested ACRs
    pub acrs: Option<Vec<String>>,
    /// Which hint identifies the user
    pub hint_type: Option<UserIdentificationHintType>,
    /// The hint
    pub hint: Option<String>,
    /// `sub` of the `id_token_hint`
    pub sub: Option<String>,
    /// `binding_message`
    pub binding_message: Option<String>,
    /// `user_code`
    pub user_code: Option<String>,
    /// Whether the service requires a `user_code`
    pub user_code_required: bool,
    /// `requested_expiry` in seconds
    pub requested_expiry: i32,
    /// `request_context`, JSON
    pub request_context: Option<String>,
    /// Warnings about the request
    pub warnings: Option<Vec<String>>,
    /// Resource indicators
    pub resources: Option<Vec<String>>,
    /// Authorization details
    pub authorization_details: Option<AuthzDetails>,
    /// Attributes of the service
    pub service_attributes: Option<Vec<Pair>>,
    /// Attributes of the client
    pub client_attributes: Option<Vec<Pair>>,
    /// `grant_management_action`
    pub gm_action: Option<GmAction>,
    /// `grant_id`
    pub grant_id: Option<String>,
    /// Subject of the grant referenced by `grant_id`
    pub grant_subject: Option<String>,
    /// Grant referenced by `grant_id`
    pub grant: Option<Grant>,
    /// Ticket for the issue / fail call
    pub ticket: Option<String>,
}

/// # BackchannelAuthenticationIssueRequest
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationIssueRequest {
    /// Ticket of the [BackchannelAuthenticationResponse]
    pub ticket: String,
}

impl BackchannelAuthenticationIssueRequest {
    /// Creates a request for the ticket
    pub fn new(ticket: impl Into<String>) -> Self {
        Self {
            ticket: ticket.into(),
        }
    }
}

wire_enum! {
    /// What the backchannel authentication endpoint should do with the issue result
    #[derive(Default)]
    pub enum BackchannelAuthenticationIssueAction {
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// The ticket was not valid
        InvalidTicket => "INVALID_TICKET",
        /// Return `200 OK`, then start authenticating the user
        Ok => "OK",
    }
}

/// # BackchannelAuthenticationIssueResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationIssueResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the endpoint
    pub action: BackchannelAuthenticationIssueAction,
    /// Response body
    pub response_content: Option<String>,
    /// Issued `auth_req_id`
    pub auth_req_id: Option<String>,
    /// Lifetime of the `auth_req_id` in seconds
    pub expires_in: i32,
    /// Minimum polling interval in seconds
    pub interval: i32,
}

wire_enum! {
    /// Why the backchannel authentication request failed
    #[derive(Default)]
    pub enum BackchannelAuthenticationFailReason {
        /// The user denied the request
        AccessDenied => "ACCESS_DENIED",
        /// The `login_hint_token` has expired
        ExpiredLoginHintToken => "EXPIRED_LOGIN_HINT_TOKEN",
        /// The `binding_message` is not acceptable
        InvalidBindingMessage => "INVALID_BINDING_MESSAGE",
        /// A requested resource is not acceptable
        InvalidTarget => "INVALID_TARGET",
        /// The `user_code` is wrong
        InvalidUserCode => "INVALID_USER_CODE",
        /// The `user_code` is required but missing
        MissingUserCode => "MISSING_USER_CODE",
        /// Server error
        #[default]
        ServerError => "SERVER_ERROR",
        /// The client may not use CIBA for this user
        UnauthorizedClient => "UNAUTHORIZED_CLIENT",
        /// The hint identifies no user
        UnknownUserId => "UNKNOWN_USER_ID",
    }
}

/// # BackchannelAuthenticationFailRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationFailRequest {
    /// Ticket of the [BackchannelAuthenticationResponse]
    pub ticket: String,
    /// Failure reason
    pub reason: BackchannelAuthenticationFailReason,
    /// Custom `error_description`
    pub error_description: Option<String>,
    /// Custom `error_uri`
    pub error_uri: Option<String>,
}

impl BackchannelAuthenticationFailRequest {
    /// Creates a request for the ticket and reason
    pub fn new(ticket: impl Into<String>, reason: BackchannelAuthenticationFailReason) -> Self {
        Self {
            ticket: ticket.into(),
            reason,
            ..Default::default()
        }
    }
}

wire_enum! {
    /// What the backchannel authentication endpoint should do with the fail result
    #[derive(Default)]
    pub enum BackchannelAuthenticationFailAction {
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// Return `403 Forbidden`
        Forbidden => "FORBIDDEN",
        /// Return `400 Bad Request`
        BadRequest => "BAD_REQUEST",
    }
}

/// # BackchannelAuthenticationFailResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationFailResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the endpoint
    pub action: BackchannelAuthenticationFailAction,
    /// Response body
    pub response_content: Option<String>,
}

wire_enum! {
    /// Outcome of authenticating the user on the authentication device
    #[derive(Default)]
    pub enum BackchannelAuthenticationCompleteResult {
        /// Authentication or authorization could not be done
        #[default]
        TransactionFailed => "TRANSACTION_FAILED",
        /// The user denied the request
        AccessDenied => "ACCESS_DENIED",
        /// The user authorized the request
        Authorized => "AUTHORIZED",
    }
}

/// # BackchannelAuthenticationCompleteRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationCompleteRequest {
    /// Ticket of the [BackchannelAuthenticationResponse]
    pub ticket: String,
    /// Outcome of the authentication
    pub result: BackchannelAuthenticationCompleteResult,
    /// Subject of the user
    pub subject: Option<String>,
    /// Value of the `sub` claim, when it differs from `subject`
    pub sub: Option<String>,
    /// Authentication time, seconds since the epoch
    pub auth_time: i64,
    /// ACR the user was authenticated with
    pub acr: Option<String>,
    /// Claims to embed in the ID token, JSON object
    pub claims: Option<String>,
    /// Properties to attach to the access token
    pub properties: Option<Vec<Property>>,
    /// Scopes replacing the requested ones
    pub scopes: Option<Vec<String>>,
    /// Extra JWS header parameters of the ID token, JSON object
    pub idt_header_params: Option<String>,
    /// Custom `error_description`
    pub error_description: Option<String>,
    /// Custom `error_uri`
    pub error_uri: Option<String>,
    /// Claims the user consented to
    pub consented_claims: Option<Vec<String>>,
    /// Extra claims of a JWT access token, JSON object
    pub jwt_at_claims: Option<String>,
    /// Access token value to use instead of a generated one
    pub access_token: Option<String>,
    /// Values to compute transformed claims from, JSON object
    pub claims_for_tx: Option<String>,
    /// Values to compute transformed claims in `verified_claims` from
    pub verified_claims_for_tx: Option<Vec<String>>,
    /// Format of the ID token's `aud` claim, `array` or `string`
    pub id_token_aud_type: Option<String>,
    /// Access token duration in seconds, 0 for the default
    pub access_token_duration: i64,
}

impl BackchannelAuthenticationCompleteRequest {
    /// Creates a request for the ticket and outcome
    pub fn new(ticket: impl Into<String>, result: BackchannelAuthenticationCompleteResult) -> Self {
        Self {
            ticket: ticket.into(),
            result,
            ..Default::default()
        }
    }

    /// Set the subject of the authenticated user
    pub fn set_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the ID token claims from a JSON object
    pub fn set_claims(mut self, claims: &Value) -> Self {
        self.claims = Some(claims.to_string());
        self
    }
}

wire_enum! {
    /// What to do after the completion was recorded
    #[derive(Default)]
    pub enum BackchannelAuthenticationCompleteAction {
        /// Something went wrong on the service
        #[default]
        ServerError => "SERVER_ERROR",
        /// Nothing to do (poll mode)
        NoAction => "NO_ACTION",
        /// Send `responseContent` to the client notification endpoint (ping / push)
        Notification => "NOTIFICATION",
    }
}

/// # BackchannelAuthenticationCompleteResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationCompleteResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// What to do next
    pub action: BackchannelAuthenticationCompleteAction,
    /// Body of the notification
    pub response_content: Option<String>,
    /// Client id
    pub client_id: i64,
    /// Client id alias
    pub client_id_alias: Option<String>,
    /// Whether the client id alias was used
    pub client_id_alias_used: bool,
    /// Client name
    pub client_name: Option<String>,
    /// Token delivery mode of the client
    pub delivery_mode: Option<DeliveryMode>,
    /// Client notification endpoint
    pub client_notification_endpoint: Option<String>,
    /// Bearer token for the client notification endpoint
    pub client_notification_token: Option<String>,
    /// The `auth_req_id`
    pub auth_req_id: Option<String>,
    /// Issued access token (push mode)
    pub access_token: Option<String>,
    /// Issued refresh token (push mode)
    pub refresh_token: Option<String>,
    /// Issued ID token (push mode)
    pub id_token: Option<String>,
    /// Access token duration in seconds
    pub access_token_duration: i64,
    /// Refresh token duration in seconds
    pub refresh_token_duration: i64,
    /// ID token duration in seconds
    pub id_token_duration: i64,
    /// Access token expiry, milliseconds since the epoch
    pub access_token_expires_at: i64,
    /// Refresh token expiry, milliseconds since the epoch
    pub refresh_token_expires_at: i64,
    /// Granted scopes
    pub scopes: Option<Vec<String>>,
    /// Properties attached to the access token
    pub properties: Option<Vec<Property>>,
    /// Access token in JWT format
    pub jwt_access_token: Option<String>,
    /// Resources
    pub resources: Option<Vec<String>>,
    /// Authorization details
    pub authorization_details: Option<AuthzDetails>,
    /// Attributes of the service
    pub service_attributes: Option<Vec<Pair>>,
    /// Attributes of the client
    pub client_attributes: Option<Vec<Pair>>,
    /// Grant id
    pub grant_id: Option<String>,
}

impl_api_response!(
    BackchannelAuthenticationResponse,
    BackchannelAuthenticationIssueResponse,
    BackchannelAuthenticationFailResponse,
    BackchannelAuthenticationCompleteResponse,
);
