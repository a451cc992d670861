//! Request DTOs for the proxy API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query string for a resource lookup (`GET /posts?id=1`).
///
/// The ID is kept as raw text so that validation happens in one place,
/// inside the cache gateway.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceQuery {
    /// Requested resource ID
    #[serde(default)]
    pub id: Option<String>,
}

impl ResourceQuery {
    /// Returns the raw ID, or an empty string when the parameter is absent.
    pub fn raw_id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}
