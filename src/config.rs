//! # Configuration
//! Where the Authlete API lives and how to authenticate against it.

use std::{env, fmt, str::FromStr};

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use url::Url;

use crate::types::{AuthleteError, UnknownVariantError};

const DEFAULT_BASE_URL: &str = "https://api.authlete.com";

/// Major version of the Authlete API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ApiVersion {
    /// Paths are `/api/...`, the service authenticates with its API key and secret
    #[default]
    V2,
    /// Paths are `/api/{serviceId}/...`, the service authenticates with an access token
    V3,
}

impl FromStr for ApiVersion {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("v2") => Ok(Self::V2),
            v if v.eq_ignore_ascii_case("v3") => Ok(Self::V3),
            _ => Err(UnknownVariantError {
                type_name: "ApiVersion",
                value: s.to_string(),
            }),
        }
    }
}

/// # AuthleteConfiguration
/// Connection settings for [crate::api::AuthleteApi].
///
/// Can be deserialized from any serde source (snake_case keys) or read from the
/// environment with [AuthleteConfiguration::from_env].
#[skip_serializing_none]
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthleteConfiguration {
    /// Base url of the API, without the `/api` suffix
    pub base_url: String,
    /// API generation the base url speaks
    pub api_version: ApiVersion,
    /// Service API key (V2)
    pub service_api_key: Option<String>,
    /// Service API secret (V2)
    pub service_api_secret: Option<String>,
    /// Service access token (V3)
    pub service_access_token: Option<String>,
    /// Service id, part of every V3 path
    pub service_id: Option<String>,
}

impl Default for AuthleteConfiguration {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: ApiVersion::V2,
            service_api_key: None,
            service_api_secret: None,
            service_access_token: None,
            service_id: None,
        }
    }
}

impl fmt::Debug for AuthleteConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthleteConfiguration")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("service_api_key", &self.service_api_key)
            .field(
                "service_api_secret",
                &self.service_api_secret.as_ref().map(|_| "<redacted>"),
            )
            .field(
                "service_access_token",
                &self.service_access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("service_id", &self.service_id)
            .finish()
    }
}

impl AuthleteConfiguration {
    /// Configuration for a V2 service
    pub fn v2(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_version: ApiVersion::V2,
            service_api_key: Some(api_key.into()),
            service_api_secret: Some(api_secret.into()),
            ..Default::default()
        }
    }

    /// Configuration for a V3 service
    pub fn v3(
        base_url: impl Into<String>,
        service_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_version: ApiVersion::V3,
            service_access_token: Some(access_token.into()),
            service_id: Some(service_id.into()),
            ..Default::default()
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// | Variable | Field |
    /// |---|---|
    /// | `AUTHLETE_BASE_URL` | [AuthleteConfiguration::base_url] |
    /// | `AUTHLETE_API_VERSION` | [AuthleteConfiguration::api_version] |
    /// | `AUTHLETE_SERVICE_APIKEY` | [AuthleteConfiguration::service_api_key] |
    /// | `AUTHLETE_SERVICE_APISECRET` | [AuthleteConfiguration::service_api_secret] |
    /// | `AUTHLETE_SERVICE_ACCESSTOKEN` | [AuthleteConfiguration::service_access_token] |
    /// | `AUTHLETE_SERVICE_ID` | [AuthleteConfiguration::service_id] |
    pub fn from_env() -> Result<Self, AuthleteError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Same as [AuthleteConfiguration::from_env] with a custom variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, AuthleteError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let api_version = match get("AUTHLETE_API_VERSION") {
            Some(v) => v.parse::<ApiVersion>().map_err(|e| {
                AuthleteError::Configuration(format!("AUTHLETE_API_VERSION: {e}"))
            })?,
            None => ApiVersion::V2,
        };

        Ok(Self {
            base_url: get("AUTHLETE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_version,
            service_api_key: get("AUTHLETE_SERVICE_APIKEY"),
            service_api_secret: get("AUTHLETE_SERVICE_APISECRET"),
            service_access_token: get("AUTHLETE_SERVICE_ACCESSTOKEN"),
            service_id: get("AUTHLETE_SERVICE_ID"),
        })
    }

    /// Value of the `Authorization` header sent with every call
    pub fn authorization_header(&self) -> Result<String, AuthleteError> {
        match self.api_version {
            ApiVersion::V2 => {
                let (Some(key), Some(secret)) = (&self.service_api_key, &self.service_api_secret)
                else {
                    return Err(AuthleteError::Configuration(
                        "V2 requires service_api_key and service_api_secret".to_string(),
                    ));
                };
                Ok(format!("Basic {}", STANDARD.encode(format!("{key}:{secret}"))))
            }
            ApiVersion::V3 => self
                .service_access_token
                .as_ref()
                .map(|token| format!("Bearer {token}"))
                .ok_or_else(|| {
                    AuthleteError::Configuration(
                        "V3 requires service_access_token".to_string(),
                    )
                }),
        }
    }

    /// Absolute url of an API path such as `/auth/authorization`
    pub fn endpoint(&self, path: &str) -> Result<Url, AuthleteError> {
        let service_id = match self.api_version {
            ApiVersion::V2 => None,
            ApiVersion::V3 => Some(self.service_id.as_deref().ok_or_else(|| {
                AuthleteError::Configuration("V3 requires service_id".to_string())
            })?),
        };

        let mut url = Url::parse(&format!("{}/api", self.base_url.trim_end_matches('/')))?;

        url.path_segments_mut()
            .map_err(|_| {
                AuthleteError::Configuration(format!("invalid base_url: {}", self.base_url))
            })?
            .extend(service_id)
            .extend(path.split('/').filter(|s| !s.is_empty()));

        Ok(url)
    }
}
