//! # Authlete API module
//! Sends the [crate::dto] types to the Authlete API

mod authlete_api;

/// Implementation of the endpoint methods
pub mod api_impl;

pub use authlete_api::AuthleteApi;
