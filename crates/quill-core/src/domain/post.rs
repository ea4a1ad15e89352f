use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a published article.
///
/// Field names are camelCase on the wire to match the consuming client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    /// Full body; paragraphs are separated by a blank line.
    pub content: String,
    pub category: String,
    pub image_url: String,
    pub author_name: String,
    pub author_avatar: String,
    pub author_bio: Option<String>,
    /// Estimated reading time in minutes.
    pub read_time: u32,
    pub likes: u32,
    #[serde(with = "featured_flag")]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new post. Server-assigned fields
/// (`id`, `likes`, `created_at`) are stamped by [`Post::new`].
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image_url: String,
    pub author_name: String,
    pub author_avatar: String,
    pub author_bio: Option<String>,
    pub read_time: u32,
    pub featured: bool,
}

impl Post {
    /// Create a new post with generated ID and creation timestamp.
    pub fn new(draft: PostDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            category: draft.category,
            image_url: draft.image_url,
            author_name: draft.author_name,
            author_avatar: draft.author_avatar,
            author_bio: draft.author_bio,
            read_time: draft.read_time,
            likes: 0,
            featured: draft.featured,
            created_at: Utc::now(),
        }
    }
}

/// Wire encoding of the `featured` flag.
///
/// Existing consumers exchange the flag as the strings `"true"`/`"false"`,
/// so the boolean crosses the boundary as a string in both directions.
pub mod featured_flag {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match String::deserialize(deserializer)?.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(D::Error::invalid_value(
                Unexpected::Str(other),
                &"\"true\" or \"false\"",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: "Test Post".to_string(),
            excerpt: "An excerpt".to_string(),
            content: "Some content.\n\nSecond paragraph.".to_string(),
            category: "Technology".to_string(),
            image_url: "https://example.com/cover.jpg".to_string(),
            author_name: "Test Author".to_string(),
            author_avatar: "https://example.com/avatar.jpg".to_string(),
            author_bio: None,
            read_time: 4,
            featured: false,
        }
    }

    #[test]
    fn new_post_gets_server_assigned_fields() {
        let post = Post::new(draft());
        assert_eq!(post.likes, 0);
        assert_eq!(post.title, "Test Post");

        let other = Post::new(draft());
        assert_ne!(post.id, other.id);
    }

    #[test]
    fn featured_is_a_string_on_the_wire() {
        let value = serde_json::to_value(Post::new(draft())).unwrap();
        assert_eq!(value["featured"], serde_json::json!("false"));
        // camelCase renames apply to multi-word fields
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn featured_rejects_non_flag_strings() {
        let json = serde_json::to_string(&Post::new(draft())).unwrap();
        let tampered = json.replace("\"false\"", "\"maybe\"");
        assert!(serde_json::from_str::<Post>(&tampered).is_err());
    }
}
