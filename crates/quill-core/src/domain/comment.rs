use serde::{Deserialize, Serialize};

/// Comment record nested under a [`BlogPost`](super::BlogPost).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub content: String,
    pub date: String,
}

impl Comment {
    /// Comment ids combine the parent post index and the comment position.
    pub fn id_for(post_index: u32, position: u32) -> String {
        format!("c-{post_index}-{position}")
    }
}
