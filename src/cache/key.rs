//! Cache Key Module
//!
//! Resource kinds fronted by the proxy and the composite key identifying one
//! cached resource.

use std::fmt;
use std::str::FromStr;

use crate::error::{ProxyError, Result};

// == Resource Kind ==
/// The closed set of upstream resources the proxy fronts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Post,
    Todo,
}

impl ResourceKind {
    /// All fronted kinds.
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Post, ResourceKind::Todo];

    /// Path segment naming this kind, both on the proxy and on the upstream.
    pub fn path_segment(self) -> &'static str {
        match self {
            ResourceKind::Post => "posts",
            ResourceKind::Todo => "todos",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = ProxyError;

    fn from_str(s: &str) -> Result<Self> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.path_segment() == s)
            .ok_or_else(|| ProxyError::UnknownResource(s.to_string()))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

// == Cache Key ==
/// Identifies one cached resource: its kind and numeric ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: ResourceKind,
    pub id: u64,
}

impl CacheKey {
    pub fn new(kind: ResourceKind, id: u64) -> Self {
        Self { kind, id }
    }

    // == Parse ==
    /// Builds a key from raw request input.
    ///
    /// The ID is checked before the resource type, so a request that is wrong
    /// on both counts reports `InvalidInput`.
    pub fn parse(resource: &str, id: &str) -> Result<Self> {
        let id = parse_id(id)?;
        let kind = resource.parse::<ResourceKind>()?;
        Ok(Self::new(kind, id))
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

/// Parses a non-negative integer ID. One leading `+` is allowed; `-`,
/// blanks and anything beyond `u64::MAX` are rejected.
fn parse_id(raw: &str) -> Result<u64> {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProxyError::InvalidInput(format!("'{}'", raw)));
    }
    digits
        .parse::<u64>()
        .map_err(|_| ProxyError::InvalidInput(format!("'{}' is out of range", raw)))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_path_segment() {
        assert_eq!("posts".parse::<ResourceKind>().unwrap(), ResourceKind::Post);
        assert_eq!("todos".parse::<ResourceKind>().unwrap(), ResourceKind::Todo);
        assert!(matches!(
            "users".parse::<ResourceKind>(),
            Err(ProxyError::UnknownResource(_))
        ));
        // Segments are case-sensitive, as routes are
        assert!("Posts".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_key_display() {
        let key = CacheKey::new(ResourceKind::Todo, 12);
        assert_eq!(key.to_string(), "todos/12");
    }

    #[test]
    fn test_parse_valid() {
        let key = CacheKey::parse("posts", "1").unwrap();
        assert_eq!(key, CacheKey::new(ResourceKind::Post, 1));

        let key = CacheKey::parse("todos", "0").unwrap();
        assert_eq!(key, CacheKey::new(ResourceKind::Todo, 0));
    }

    #[test]
    fn test_parse_explicit_plus_sign() {
        let key = CacheKey::parse("posts", "+1").unwrap();
        assert_eq!(key, CacheKey::new(ResourceKind::Post, 1));

        let key = CacheKey::parse("todos", "+007").unwrap();
        assert_eq!(key, CacheKey::new(ResourceKind::Todo, 7));
    }

    #[test]
    fn test_parse_invalid_ids() {
        let invalid = [
            "", "abc", "-1", "+", "++1", "+-1", "1.5", " 1", "18446744073709551616",
        ];
        for raw in invalid {
            assert!(
                matches!(CacheKey::parse("posts", raw), Err(ProxyError::InvalidInput(_))),
                "expected InvalidInput for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_unknown_resource() {
        assert!(matches!(
            CacheKey::parse("comments", "1"),
            Err(ProxyError::UnknownResource(_))
        ));
    }

    #[test]
    fn test_parse_checks_id_first() {
        assert!(matches!(
            CacheKey::parse("comments", "x"),
            Err(ProxyError::InvalidInput(_))
        ));
    }
}
