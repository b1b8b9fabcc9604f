use serde::{Deserialize, Serialize};

/// Domain model for a member of the feed. `is_online` is computed by the
/// presence layer upstream; this app only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: String,
    pub first_name: String,
    /// Opaque image reference resolved by an external pipeline.
    pub avatar: String,
    pub is_online: bool,
}

/// An ephemeral story. The feed is assumed to already contain only
/// currently-valid entries; expiry is not modeled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub timestamp: i64,
}
