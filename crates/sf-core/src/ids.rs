//! Strongly typed identifier wrappers for store entities.
//!
//! Unit and station identities are opaque strings assigned by the store (and,
//! for units, by fleet maintenance at runtime), so the wrappers hold a
//! `String` rather than a dense integer index.  Both are `Ord + Hash` so they
//! can be used as map keys and sorted collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around an owned string.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                $name(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// `true` for the empty string — rejected at the model boundary.
            #[inline]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Opaque identity of a mobile energy-storage unit.
    pub struct UnitId;
}

string_id! {
    /// Opaque identity of a fixed swap/charge station.
    pub struct StationId;
}
