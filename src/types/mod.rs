//! # Types Module
//! Errors and the http client seam used by [crate::api::AuthleteApi]

mod errors;
pub mod http_client;

pub use errors::{ApiErrorBody, AuthleteError, UnknownVariantError};
pub use http_client::{AuthleteHttpClient, HttpMethod, HttpRequest, HttpResponse};
