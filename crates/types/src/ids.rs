//! Newtype wrappers for the string identifiers that flow through an export.
//!
//! A section identifier and the location of its snapshot are both plain
//! strings in a manifest; keeping them as distinct types stops one being
//! passed where the other is expected.

use std::fmt;
use std::sync::Arc;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(value: impl Into<Arc<str>>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s.into())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.into())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Stable identifier of a content block, e.g. `"experience"`.
    BlockId
);

string_id!(
    /// Location of the material a rasterizer renders a block from.
    ResourceUri
);

impl ResourceUri {
    /// True for `http://` and `https://` locations.
    pub fn is_remote(&self) -> bool {
        let s = self.as_str();
        s.starts_with("http://") || s.starts_with("https://")
    }
}
