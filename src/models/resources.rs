//! Resource Models
//!
//! Wire shapes of the two upstream resources. Field names follow the
//! upstream's camelCase JSON.

use serde::{Deserialize, Serialize};

/// A single post as served by the upstream `/posts/{id}` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Owning user ID
    pub user_id: u64,
    /// Post ID
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// A single todo as served by the upstream `/todos/{id}` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Owning user ID
    pub user_id: u64,
    /// Todo ID
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

// == Resource ==
/// Payload held in the cache for one key.
///
/// Serialized untagged, so clients receive the bare post or todo object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Resource {
    Post(Post),
    Todo(Todo),
}

impl From<Post> for Resource {
    fn from(post: Post) -> Self {
        Resource::Post(post)
    }
}

impl From<Todo> for Resource {
    fn from(todo: Todo) -> Self {
        Resource::Todo(todo)
    }
}
