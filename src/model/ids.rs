//! Opaque prefixed identifiers
//!
//! Workspace and document ids are a fixed textual prefix followed by a
//! UUID v4 (`ws_…`, `doc_…`). Parsing is strict: a wrong prefix, a
//! non-UUID tail or a UUID of another version is rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CaddyError, Result};

fn parse_prefixed(prefix: &str, s: &str) -> Result<Uuid> {
    let malformed = || CaddyError::InvalidIdentifier(s.to_string());
    let tail = s.strip_prefix(prefix).ok_or_else(malformed)?;
    let uuid = Uuid::parse_str(tail).map_err(|_| malformed())?;
    if uuid.get_version_num() != 4 {
        return Err(malformed());
    }
    Ok(uuid)
}

macro_rules! prefixed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(Uuid);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            /// Generate a fresh random id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", Self::PREFIX, self.0.hyphenated())
            }
        }

        impl FromStr for $name {
            type Err = CaddyError;

            fn from_str(s: &str) -> Result<Self> {
                parse_prefixed(Self::PREFIX, s).map(Self)
            }
        }

        impl TryFrom<String> for $name {
            type Error = CaddyError;

            fn try_from(s: String) -> Result<Self> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.to_string()
            }
        }
    };
}

prefixed_id!(
    /// Identifier of a workspace (`ws_<uuid-v4>`)
    WorkspaceId,
    "ws_"
);

prefixed_id!(
    /// Identifier of an open document (`doc_<uuid-v4>`)
    DocumentId,
    "doc_"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_roundtrip() {
        let id = DocumentId::new();
        let text = id.to_string();
        assert!(text.starts_with("doc_"));
        assert_eq!(text.parse::<DocumentId>().unwrap(), id);
    }

    #[test]
    fn test_rejects_wrong_prefix() {
        let ws = WorkspaceId::new().to_string();
        assert!(matches!(
            ws.parse::<DocumentId>(),
            Err(CaddyError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_rejects_garbage_tail() {
        assert!("doc_not-a-uuid".parse::<DocumentId>().is_err());
        assert!("doc_".parse::<DocumentId>().is_err());
        assert!("".parse::<WorkspaceId>().is_err());
    }

    #[test]
    fn test_rejects_non_v4_uuid() {
        // Nil UUID has version 0
        let nil = format!("ws_{}", Uuid::nil().hyphenated());
        assert!(nil.parse::<WorkspaceId>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let id = WorkspaceId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back: WorkspaceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<WorkspaceId>("\"ws_123\"").is_err());
    }
}
