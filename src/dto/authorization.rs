//! Types of `/auth/authorization`, `/auth/authorization/issue` and `/auth/authorization/fail`
//!
//! The authorization endpoint of the service forwards the request parameters to
//! `/auth/authorization` and follows the returned [AuthorizationAction]. After
//! user interaction it finishes the flow with either
//! [AuthorizationIssueRequest] or [AuthorizationFailRequest], both keyed by the
//! `ticket` of the [AuthorizationResponse].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::common::{
    AuthzDetails, Client, Display, DynamicScope, GmAction, Grant, Prompt, Property, Scope,
};

/// # AuthorizationRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationRequest {
    /// Request parameters as received by the authorization endpoint, in
    /// `application/x-www-form-urlencoded` format
    pub parameters: String,
    /// Arbitrary text echoed back untouched
    pub context: Option<String>,
}

impl AuthorizationRequest {
    /// Creates a request for the given query string or form body
    pub fn new(parameters: impl Into<String>) -> Self {
        Self {
            parameters: parameters.into(),
            context: None,
        }
    }
}

wire_enum! {
    /// What the authorization endpoint should do next
    #[derive(Default)]
    pub enum AuthorizationAction {
        /// Return `500 Internal Server Error` with `responseContent`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// Return `400 Bad Request` with `responseContent`
        BadRequest => "BAD_REQUEST",
        /// Redirect to the `Location` in `responseContent`
        Location => "LOCATION",
        /// Return the HTML form in `responseContent`
        Form => "FORM",
        /// `prompt=none`: authenticate without interacting with the user
        NoInteraction => "NO_INTERACTION",
        /// Show the authentication / consent page
        Interaction => "INTERACTION",
    }
}

/// # AuthorizationResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the authorization endpoint
    pub action: AuthorizationAction,
    /// Client application that made the request
    pub client: Option<Client>,
    /// `display`
    pub display: Option<Display>,
    /// `max_age`, 0 when absent
    pub max_age: i32,
    /// Requested scopes
    pub scopes: Option<Vec<Scope>>,
    /// Requested dynamic scopes
    pub dynamic_scopes: Option<Vec<DynamicScope>>,
    /// `ui_locales` supported by the service
    pub ui_locales: Option<Vec<String>>,
    /// `claims_locales` supported by the service
    pub claims_locales: Option<Vec<String>>,
    /// Claims requested for the ID token
    pub claims: Option<Vec<String>>,
    /// Claims requested for the userinfo response
    pub claims_at_user_info: Option<Vec<String>>,
    /// Whether the requested ACR is essential
    pub acr_essential: bool,
    /// Whether the client id alias was used in the request
    pub client_id_alias_used: bool,
    /// Whether the entity id was used as the client id
    pub client_entity_id_used: bool,
    /// Requested ACRs
    pub acrs: Option<Vec<String>>,
    /// Subject the request requires the user to be
    pub subject: Option<String>,
    /// `login_hint`
    pub login_hint: Option<String>,
    /// `prompt` values
    pub prompts: Option<Vec<Prompt>>,
    /// Prompt with the lowest precedence
    pub lowest_prompt: Option<Prompt>,
    /// Payload of the request object, JSON
    pub request_object_payload: Option<String>,
    /// `id_token` member of the `claims` request parameter, JSON
    pub id_token_claims: Option<String>,
    /// `userinfo` member of the `claims` request parameter, JSON
    pub user_info_claims: Option<String>,
    /// Resource indicators
    pub resources: Option<Vec<String>>,
    /// `authorization_details`
    pub authorization_details: Option<AuthzDetails>,
    /// `purpose` (OpenID Connect for Identity Assurance)
    pub purpose: Option<String>,
    /// Response body or redirect uri, depending on the action
    pub response_content: Option<String>,
    /// Ticket for the issue / fail call
    pub ticket: Option<String>,
    /// `grant_management_action`
    pub gm_action: Option<GmAction>,
    /// `grant_id`
    pub grant_id: Option<String>,
    /// Grant referenced by `grant_id`
    pub grant: Option<Grant>,
    /// Subject of the grant referenced by `grant_id`
    pub grant_subject: Option<String>,
    /// Transformed claims requested for the ID token
    pub requested_claims_for_tx: Option<Vec<String>>,
    /// Transformed claims requested inside `verified_claims`
    pub requested_verified_claims_for_tx: Option<Vec<Vec<String>>>,
    /// Definitions of transformed claims, JSON
    pub transformed_claims: Option<String>,
}

/// # AuthorizationIssueRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationIssueRequest {
    /// Ticket of the [AuthorizationResponse]
    pub ticket: String,
    /// Subject of the authenticated user
    pub subject: String,
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
    /// Claims the user consented to
    pub consented_claims: Option<Vec<String>>,
    /// Values to compute transformed claims from, JSON object
    pub claims_for_tx: Option<String>,
    /// Values to compute transformed claims in `verified_claims` from
    pub verified_claims_for_tx: Option<Vec<String>>,
    /// Extra claims of a JWT access token, JSON object
    pub jwt_at_claims: Option<String>,
    /// Access token value to use instead of a generated one
    pub access_token: Option<String>,
    /// Format of the ID token's `aud` claim, `array` or `string`
    pub id_token_aud_type: Option<String>,
    /// Access token duration in seconds, 0 for the service default
    pub access_token_duration: i64,
    /// Authorization details replacing the requested ones
    pub authorization_details: Option<AuthzDetails>,
}

impl AuthorizationIssueRequest {
    /// Creates a request for the ticket and the authenticated subject
    pub fn new(ticket: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            ticket: ticket.into(),
            subject: subject.into(),
            ..Default::default()
        }
    }

    /// Set the authentication time
    pub fn set_auth_time(mut self, auth_time: i64) -> Self {
        self.auth_time = auth_time;
        self
    }

    /// Set the ACR
    pub fn set_acr(mut self, acr: impl Into<String>) -> Self {
        self.acr = Some(acr.into());
        self
    }

    /// Set the ID token claims from a JSON object
    pub fn set_claims(mut self, claims: &Value) -> Self {
        self.claims = Some(claims.to_string());
        self
    }

    /// Add a property to attach to the access token
    pub fn add_property(mut self, property: Property) -> Self {
        self.properties.get_or_insert_with(Vec::new).push(property);
        self
    }
}

wire_enum! {
    /// What the authorization endpoint should do with the issue result
    #[derive(Default)]
    pub enum AuthorizationIssueAction {
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// Return `400 Bad Request`
        BadRequest => "BAD_REQUEST",
        /// Redirect to the `Location` in `responseContent`
        Location => "LOCATION",
        /// Return the HTML form in `responseContent`
        Form => "FORM",
    }
}

/// # AuthorizationIssueResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationIssueResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the authorization endpoint
    pub action: AuthorizationIssueAction,
    /// Response body or redirect uri, depending on the action
    pub response_content: Option<String>,
    /// Issued access token (implicit / hybrid flows)
    pub access_token: Option<String>,
    /// Access token expiry, milliseconds since the epoch
    pub access_token_expires_at: i64,
    /// Access token duration in seconds
    pub access_token_duration: i64,
    /// Issued ID token
    pub id_token: Option<String>,
    /// Issued authorization code
    pub authorization_code: Option<String>,
    /// Access token in JWT format, when the service issues them
    pub jwt_access_token: Option<String>,
}

wire_enum! {
    /// Why the authorization request failed
    #[derive(Default)]
    pub enum AuthorizationFailReason {
        /// Unknown reason
        #[default]
        Unknown => "UNKNOWN",
        /// `prompt=none` and no user is logged in
        NotLoggedIn => "NOT_LOGGED_IN",
        /// `max_age` is not supported
        MaxAgeNotSupported => "MAX_AGE_NOT_SUPPORTED",
        /// The authentication is older than `max_age`
        ExceedsMaxAge => "EXCEEDS_MAX_AGE",
        /// The logged in user is not the requested subject
        DifferentSubject => "DIFFERENT_SUBJECT",
        /// The user was not authenticated with a requested ACR
        AcrNotSatisfied => "ACR_NOT_SATISFIED",
        /// The user denied the request
        Denied => "DENIED",
        /// Server error
        ServerError => "SERVER_ERROR",
        /// The user could not be authenticated
        NotAuthenticated => "NOT_AUTHENTICATED",
        /// `prompt=none` but account selection is needed
        AccountSelectionRequired => "ACCOUNT_SELECTION_REQUIRED",
        /// `prompt=none` but consent is needed
        ConsentRequired => "CONSENT_REQUIRED",
        /// `prompt=none` but interaction is needed
        InteractionRequired => "INTERACTION_REQUIRED",
        /// A requested resource is not acceptable
        InvalidTarget => "INVALID_TARGET",
    }
}

/// # AuthorizationFailRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationFailRequest {
    /// Ticket of the [AuthorizationResponse]
    pub ticket: String,
    /// Failure reason
    pub reason: AuthorizationFailReason,
    /// Custom `error_description`
    pub description: Option<String>,
}

impl AuthorizationFailRequest {
    /// Creates a request for the ticket and reason
    pub fn new(ticket: impl Into<String>, reason: AuthorizationFailReason) -> Self {
        Self {
            ticket: ticket.into(),
            reason,
            description: None,
        }
    }

    /// Set the `error_description`
    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

wire_enum! {
    /// What the authorization endpoint should do with the fail result
    #[derive(Default)]
    pub enum AuthorizationFailAction {
        /// Return `500 Internal Server Error`
        #[default]
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// Return `400 Bad Request`
        BadRequest => "BAD_REQUEST",
        /// Redirect to the `Location` in `responseContent`
        Location => "LOCATION",
        /// Return the HTML form in `responseContent`
        Form => "FORM",
    }
}

/// # AuthorizationFailResponse
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationFailResponse {
    /// Result code
    pub result_code: Option<String>,
    /// Result message
    pub result_message: Option<String>,
    /// Next action of the authorization endpoint
    pub action: AuthorizationFailAction,
    /// Response body or redirect uri, depending on the action
    pub response_content: Option<String>,
}

impl_api_response!(
    AuthorizationResponse,
    AuthorizationIssueResponse,
    AuthorizationFailResponse,
);
