//! Newtype wrappers around the opaque string identifiers supplied by the
//! venue configuration and the identity gateway.
//!
//! Using distinct types prevents accidentally passing a `UserId` where a
//! `SeatId` is expected. Both are plain strings on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype wrapper around an opaque `String` identifier.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner string (consuming self).
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_string_id!(
    /// Identifier of a seat, stable for the lifetime of the venue
    /// configuration. Not created or destroyed by this system.
    SeatId
);

define_string_id!(
    /// Identifier of a user, supplied by the identity gateway and trusted
    /// as already authenticated.
    UserId
);
