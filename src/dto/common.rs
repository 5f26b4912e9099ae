//! Records and enums shared by several endpoints

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

/// # Property
/// Arbitrary key-value pair attached to an access token. Hidden properties are
/// not returned by the standard introspection endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
    /// Key
    pub key: Option<String>,
    /// Value
    pub value: Option<String>,
    /// Whether the property is hidden from client applications
    pub hidden: bool,
}

impl Property {
    /// Creates a visible property
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            hidden: false,
        }
    }

    /// Creates a hidden property
    pub fn hidden(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            hidden: true,
            ..Self::new(key, value)
        }
    }
}

/// # Pair
/// Plain string key-value pair
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pair {
    /// Key
    pub key: Option<String>,
    /// Value
    pub value: Option<String>,
}

impl Pair {
    /// Creates a pair
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// # TaggedValue
/// A value with a language tag, e.g. a localized client name
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggedValue {
    /// Language tag (BCP 47)
    pub tag: Option<String>,
    /// Value
    pub value: Option<String>,
}

/// # Scope
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scope {
    /// Scope name
    pub name: Option<String>,
    /// Whether the scope is granted when a request names no scope
    pub default_entry: bool,
    /// Description
    pub description: Option<String>,
    /// Localized descriptions
    pub descriptions: Option<Vec<TaggedValue>>,
    /// Custom attributes
    pub attributes: Option<Vec<Pair>>,
}

/// # DynamicScope
/// A scope matching a dynamic scope pattern, e.g. `transaction:123`
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicScope {
    /// Name of the dynamic scope, e.g. `transaction`
    pub name: Option<String>,
    /// The scope string as requested, e.g. `transaction:123`
    pub value: Option<String>,
}

/// # AuthzDetailsElement
/// One entry of [RFC 9396](https://www.rfc-editor.org/rfc/rfc9396) `authorization_details`
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthzDetailsElement {
    /// `type`
    pub r#type: Option<String>,
    /// `locations`
    pub locations: Option<Vec<String>>,
    /// `actions`
    pub actions: Option<Vec<String>>,
    /// `datatypes`
    pub data_types: Option<Vec<String>>,
    /// `identifier`
    pub identifier: Option<String>,
    /// `privileges`
    pub privileges: Option<Vec<String>>,
    /// Remaining members of the element, as a JSON object string
    pub other_fields: Option<String>,
}

/// # AuthzDetails
/// The `authorization_details` of a request
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthzDetails {
    /// Elements
    pub elements: Option<Vec<AuthzDetailsElement>>,
}

/// # GrantScope
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrantScope {
    /// Space-delimited scopes
    pub scope: Option<String>,
    /// Resources the scopes are bound to
    pub resource: Option<Vec<String>>,
}

/// # Grant
/// Grant of [Grant Management for OAuth 2.0](https://openid.net/specs/fapi-grant-management.html)
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Grant {
    /// Granted scopes
    pub scopes: Option<Vec<GrantScope>>,
    /// Granted claims
    pub claims: Option<Vec<String>>,
    /// Granted authorization details
    pub authorization_details: Option<AuthzDetails>,
}

/// # Client
/// Client application registered to the service.
///
/// Members not modelled here are kept in [Client::others].
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    /// Sequential number
    pub number: i32,
    /// Number of the owning service
    pub service_number: i32,
    /// Client id
    pub client_id: i64,
    /// Client id alias
    pub client_id_alias: Option<String>,
    /// Whether the alias may be used in place of the client id
    pub client_id_alias_enabled: bool,
    /// Client secret
    pub client_secret: Option<String>,
    /// Client type
    pub client_type: Option<ClientType>,
    /// Developer owning the client
    pub developer: Option<String>,
    /// Client name
    pub client_name: Option<String>,
    /// Localized client names
    pub client_names: Option<Vec<TaggedValue>>,
    /// Description
    pub description: Option<String>,
    /// Localized descriptions
    pub descriptions: Option<Vec<TaggedValue>>,
    /// `WEB` or `NATIVE`
    pub application_type: Option<String>,
    /// Logo uri
    pub logo_uri: Option<String>,
    /// Home page uri
    pub client_uri: Option<String>,
    /// Privacy policy uri
    pub policy_uri: Option<String>,
    /// Terms of service uri
    pub tos_uri: Option<String>,
    /// Contacts
    pub contacts: Option<Vec<String>>,
    /// Registered redirect uris
    pub redirect_uris: Option<Vec<String>>,
    /// Grant types the client may use
    pub grant_types: Option<Vec<GrantType>>,
    /// Response types the client may use
    pub response_types: Option<Vec<String>>,
    /// Jwks uri
    pub jwks_uri: Option<String>,
    /// Subject type
    pub subject_type: Option<SubjectType>,
    /// Authentication method at the token endpoint
    pub token_auth_method: Option<ClientAuthMethod>,
    /// Whether access tokens are bound to the client certificate
    pub tls_client_certificate_bound_access_tokens: bool,
    /// Whether the client was registered through dynamic client registration
    pub dynamically_registered: bool,
    /// Custom attributes
    pub attributes: Option<Vec<Pair>>,
    /// Entity id (OpenID Federation)
    pub entity_id: Option<String>,
    /// Creation time, milliseconds since the epoch
    pub created_at: i64,
    /// Modification time, milliseconds since the epoch
    pub modified_at: i64,
    /// Members not modelled above
    #[serde(flatten, skip_serializing_if = "HashMap::is_empty")]
    pub others: HashMap<String, Value>,
}

impl Client {
    /// Returns the value of a member not modelled by [Client], if present
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        self.others.get(key)
    }
}

wire_enum! {
    /// Value of the `display` request parameter
    pub enum Display {
        /// Full page
        Page => "PAGE",
        /// Popup window
        Popup => "POPUP",
        /// Touch device
        Touch => "TOUCH",
        /// Feature phone
        Wap => "WAP",
    }
}

wire_enum! {
    /// Value of the `prompt` request parameter
    pub enum Prompt {
        /// No user interaction
        None => "NONE",
        /// Re-authentication
        Login => "LOGIN",
        /// Consent
        Consent => "CONSENT",
        /// Account selection
        SelectAccount => "SELECT_ACCOUNT",
        /// Account creation
        Create => "CREATE",
    }
}

wire_enum! {
    /// Grant type
    pub enum GrantType {
        /// `authorization_code`
        AuthorizationCode => "AUTHORIZATION_CODE",
        /// Implicit flow
        Implicit => "IMPLICIT",
        /// `password`
        Password => "PASSWORD",
        /// `client_credentials`
        ClientCredentials => "CLIENT_CREDENTIALS",
        /// `refresh_token`
        RefreshToken => "REFRESH_TOKEN",
        /// `urn:openid:params:grant-type:ciba`
        Ciba => "CIBA",
        /// `urn:ietf:params:oauth:grant-type:device_code`
        DeviceCode => "DEVICE_CODE",
        /// `urn:ietf:params:oauth:grant-type:token-exchange`
        TokenExchange => "TOKEN_EXCHANGE",
        /// `urn:ietf:params:oauth:grant-type:jwt-bearer`
        JwtBearer => "JWT_BEARER",
        /// `urn:ietf:params:oauth:grant-type:pre-authorized_code`
        PreAuthorizedCode => "PRE_AUTHORIZED_CODE",
    }
}

wire_enum! {
    /// Client authentication method
    pub enum ClientAuthMethod {
        /// Public client
        None => "NONE",
        /// `client_secret_basic`
        ClientSecretBasic => "CLIENT_SECRET_BASIC",
        /// `client_secret_post`
        ClientSecretPost => "CLIENT_SECRET_POST",
        /// `client_secret_jwt`
        ClientSecretJwt => "CLIENT_SECRET_JWT",
        /// `private_key_jwt`
        PrivateKeyJwt => "PRIVATE_KEY_JWT",
        /// `tls_client_auth`
        TlsClientAuth => "TLS_CLIENT_AUTH",
        /// `self_signed_tls_client_auth`
        SelfSignedTlsClientAuth => "SELF_SIGNED_TLS_CLIENT_AUTH",
        /// `attest_jwt_client_auth`
        AttestJwtClientAuth => "ATTEST_JWT_CLIENT_AUTH",
    }
}

wire_enum! {
    /// Client type of RFC 6749
    pub enum ClientType {
        /// Cannot keep a secret
        Public => "PUBLIC",
        /// Can keep a secret
        Confidential => "CONFIDENTIAL",
    }
}

wire_enum! {
    /// Subject identifier type
    pub enum SubjectType {
        /// Same `sub` for every client
        Public => "PUBLIC",
        /// Different `sub` per sector identifier
        Pairwise => "PAIRWISE",
    }
}

wire_enum! {
    /// CIBA token delivery mode
    pub enum DeliveryMode {
        /// The client polls the token endpoint
        Poll => "POLL",
        /// The client is notified, then calls the token endpoint
        Ping => "PING",
        /// Tokens are pushed to the client
        Push => "PUSH",
    }
}

wire_enum! {
    /// Which hint a backchannel authentication request identified the user with
    pub enum UserIdentificationHintType {
        /// `id_token_hint`
        IdTokenHint => "ID_TOKEN_HINT",
        /// `login_hint`
        LoginHint => "LOGIN_HINT",
        /// `login_hint_token`
        LoginHintToken => "LOGIN_HINT_TOKEN",
    }
}

wire_enum! {
    /// `grant_management_action`
    #[derive(Default)]
    pub enum GmAction {
        /// Query a grant
        #[default]
        Query => "QUERY",
        /// Revoke a grant
        Revoke => "REVOKE",
        /// Create a new grant
        Create => "CREATE",
        /// Merge into an existing grant
        Merge => "MERGE",
        /// Replace an existing grant
        Replace => "REPLACE",
    }
}
