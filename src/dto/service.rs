//! Query parameters of `/service/configuration` and `/service/jwks/get`
//!
//! Both endpoints answer with a JSON document meant to be returned untouched
//! (the discovery document and the JWK Set), so there is no response type.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// # ServiceConfigurationRequest
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceConfigurationRequest {
    /// Whether the document is pretty-printed
    pub pretty: bool,
    /// JSON Patch ([RFC 6902](https://www.rfc-editor.org/rfc/rfc6902)) applied to the document
    pub patch: Option<String>,
}

impl ServiceConfigurationRequest {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("pretty", self.pretty.to_string())];
        if let Some(patch) = &self.patch {
            pairs.push(("patch", patch.clone()));
        }
        pairs
    }
}

/// # ServiceJwksGetRequest
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceJwksGetRequest {
    /// Whether private keys are included
    pub include_private_keys: bool,
    /// Whether the document is pretty-printed
    pub pretty: bool,
}

impl ServiceJwksGetRequest {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("includePrivateKeys", self.include_private_keys.to_string()),
            ("pretty", self.pretty.to_string()),
        ]
    }
}
