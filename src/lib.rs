#![warn(missing_docs)]
//! # Authlete
//!
//! Request and response types of the [Authlete](https://www.authlete.com) API,
//! the backend an OAuth 2.0 / OpenID Connect authorization server delegates
//! its protocol work to. Each type maps one to one onto a JSON object of the
//! API; enums carry the API's exact string tokens.
//!
//! ## Types
//!
//! - [dto::authorization]: authorization endpoint
//! - [dto::token]: token endpoint
//! - [dto::introspection]: resource server token validation, RFC 7662
//! - [dto::revocation]: revocation endpoint
//! - [dto::userinfo]: userinfo endpoint
//! - [dto::backchannel]: CIBA
//! - [dto::device]: device authorization grant
//! - [dto::pushed_auth_req]: pushed authorization requests
//! - [dto::token_management]: token create / update
//! - [dto::grant_management]: grant management
//! - [dto::service]: discovery document and JWK Set
//!
//! ## Calling the API
//!
//! - [config::AuthleteConfiguration::from_env]
//! - [api::AuthleteApi::new]
//! - [api::AuthleteApi::authorization_async] and the other methods of [api::api_impl]
//!
//! Requests are sent through an [types::AuthleteHttpClient]. With the default
//! `http_client` feature, [http_client::DefaultHttpClient] is backed by reqwest.

pub mod dto;

pub mod api;
pub mod config;
#[cfg(feature = "http_client")]
pub mod http_client;
#[cfg(test)]
mod tests;
pub mod types;

/// Re exports from the crate
pub mod re_exports {
    pub use serde_json::{self, json, Value};
    pub use url;
}
