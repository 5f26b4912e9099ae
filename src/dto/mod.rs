//! # Authlete API request and response types
//!
//! One record per JSON object exchanged with the Authlete API. Field names are
//! mapped to the API's camelCase property names, enums to their exact string
//! tokens.
//!
//! `Option` fields are omitted from the JSON when `None`; numeric and boolean
//! fields are always written and default to `0`/`false` when missing.

/// Declares a closed set of wire tokens.
///
/// Generates the enum with serde renames, `ALL`, `as_str`, `Display` and `FromStr`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// The token this value is written as on the wire
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::types::UnknownVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::types::UnknownVariantError {
                        type_name: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

/// Implements [ApiResponse] for types carrying `result_code` and `result_message`.
macro_rules! impl_api_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::dto::ApiResponse for $ty {
                fn result_code(&self) -> Option<&str> {
                    self.result_code.as_deref()
                }

                fn result_message(&self) -> Option<&str> {
                    self.result_message.as_deref()
                }
            }
        )+
    };
}

pub mod authorization;
pub mod backchannel;
pub mod common;
pub mod device;
pub mod grant_management;
pub mod introspection;
pub mod pushed_auth_req;
pub mod revocation;
pub mod service;
pub mod token;
pub mod token_management;
pub mod userinfo;

pub use authorization::*;
pub use backchannel::*;
pub use common::*;
pub use device::*;
pub use grant_management::*;
pub use introspection::*;
pub use pushed_auth_req::*;
pub use revocation::*;
pub use service::*;
pub use token::*;
pub use token_management::*;
pub use userinfo::*;

/// Result fields every Authlete API response carries
pub trait ApiResponse {
    /// Code identifying the outcome of the call, e.g. `A004001`
    fn result_code(&self) -> Option<&str>;
    /// Short description of the outcome, meant for logs
    fn result_message(&self) -> Option<&str>;
}
