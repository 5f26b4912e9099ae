//! Types of the `/device/*` endpoints
//! ([RFC 8628](https://www.rfc-editor.org/rfc/rfc8628), Device Authorization Grant)

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::common::{
    AuthzDetails, ClientAuthMethod, DynamicScope, GmAction, Pair, Property, Scope,
};

/// # DeviceAuthorizationRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceAuthorizationRequest {
    /// Form body received by the device authorization endpoint
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

impl DeviceAuthorizationRequest {
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
    /// What the device authorization endpoint should do next
    #[derive(Default)]
    pub enum DeviceAuthorizationAction {
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// Return `400 Bad Request`
        BadRequest => "BAD_REQUEST",
        /// Return `401 Unauthorized`
        Unauthorized => "UNAUTHORIZED",
        /// Return `200 OK`
        Ok => "OK",
    }
}

/// # DeviceAuthorizationResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceAuthorizationResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the endpoint
    pub action: DeviceAuthorizationAction,
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
    /// Requested scopes
    pub scopes: Option<Vec<Scope>>,
    /// Requested dynamic scopes
    pub dynamic_scopes: Option<Vec<DynamicScope>>,
    /// Claims requested through scopes
    pub claim_names: Option<Vec<String>>,
    /// Requested ACRs
    pub acrs: Option<Vec<String>>,
    /// Issued `device_code`
    pub device_code: Option<String>,
    /// Issued `user_code`
    pub user_code: Option<String>,
    /// `verification_uri`
    pub verification_uri: Option<String>,
    /// `verification_uri_complete`
    pub verification_uri_complete: Option<String>,
    /// Lifetime of the codes in seconds
    pub expires_in: i32,
    /// Minimum polling interval in seconds
    pub interval: i32,
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
}

/// # DeviceVerificationRequest
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceVerificationRequest {
    /// User code typed in by the user
    pub user_code: String,
}

impl DeviceVerificationRequest {
    /// Creates a request for the user code
    pub fn new(user_code: impl Into<String>) -> Self {
        Self {
            user_code: user_code.into(),
        }
    }
}

wire_enum! {
    /// State of the user code
    #[derive(Default)]
    pub enum DeviceVerificationAction {
        /// Something went wrong on the service
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// The user code does not exist
        NotExist => "NOT_EXIST",
        /// The user code has expired
        Expired => "EXPIRED",
        /// The user code is valid, ask the user to authorize
        Valid => "VALID",
    }
}

/// # DeviceVerificationResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceVerificationResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// State of the user code
    pub action: DeviceVerificationAction,
    /// Client id
    pub client_id: i64,
    /// Client id alias
    pub client_id_alias: Option<String>,
    /// Whether the client id alias was used
    pub client_id_alias_used: bool,
    /// Client name
    pub client_name: Option<String>,
    /// Requested scopes
    pub scopes: Option<Vec<Scope>>,
    /// Requested dynamic scopes
    pub dynamic_scopes: Option<Vec<DynamicScope>>,
    /// Claims requested through scopes
    pub claim_names: Option<Vec<String>>,
    /// Requested ACRs
    pub acrs: Option<Vec<String>>,
    /// Expiry of the user code, milliseconds since the epoch
    pub expires_at: i64,
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
}

wire_enum! {
    /// Outcome of asking the user to authorize the device
    #[derive(Default)]
    pub enum DeviceCompleteResult {
        /// Authentication or authorization could not be done
        #[default]
        TransactionFailed => "TRANSACTION_FAILED",
        /// The user denied the request
        AccessDenied => "ACCESS_DENIED",
        /// The user authorized the request
        Authorized => "AUTHORIZED",
    }
}

/// # DeviceCompleteRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceCompleteRequest {
    /// User code the user typed in
    pub user_code: String,
    /// Outcome of the authorization
    pub result: DeviceCompleteResult,
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

impl DeviceCompleteRequest {
    /// Creates a request for the user code and outcome
    pub fn new(user_code: impl Into<String>, result: DeviceCompleteResult) -> Self {
        Self {
            user_code: user_code.into(),
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
    /// Result of recording the completion
    #[derive(Default)]
    pub enum DeviceCompleteAction {
        /// Something went wrong on the service
        #[default]
        ServerError => "SERVER_ERROR",
        /// The user code does not exist
        UserCodeNotExist => "USER_CODE_NOT_EXIST",
        /// The user code has expired
        UserCodeExpired => "USER_CODE_EXPIRED",
        /// The completion request was malformed
        InvalidRequest => "INVALID_REQUEST",
        /// The outcome was recorded
        Success => "SUCCESS",
    }
}

/// # DeviceCompleteResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceCompleteResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Result of recording the completion
    pub action: DeviceCompleteAction,
}

impl_api_response!(
    DeviceAuthorizationResponse,
    DeviceVerificationResponse,
    DeviceCompleteResponse,
);
