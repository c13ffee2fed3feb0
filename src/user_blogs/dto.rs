use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::repo::{UserBlog, UserBlogWithAuthor};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Community post with its author, as returned by the public listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBlogItem {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub author: Author,
}

impl UserBlogItem {
    /// Full author identity, for the global listing and single-post view.
    pub fn with_full_author(b: UserBlogWithAuthor) -> Self {
        Self {
            id: b.id,
            title: b.title,
            category: b.category,
            image_url: b.image_url,
            content: b.content,
            created_at: b.created_at,
            author: Author {
                id: Some(b.author_id),
                first_name: b.first_name,
                last_name: b.last_name,
                email: Some(b.email),
            },
        }
    }

    /// Name-only author, for the per-author listing.
    pub fn with_author_name(b: UserBlogWithAuthor) -> Self {
        Self {
            id: b.id,
            title: b.title,
            category: b.category,
            image_url: b.image_url,
            content: b.content,
            created_at: b.created_at,
            author: Author {
                id: None,
                first_name: b.first_name,
                last_name: b.last_name,
                email: None,
            },
        }
    }
}

/// The caller's own posts, including the update timestamp.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyBlogItem {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<UserBlog> for MyBlogItem {
    fn from(b: UserBlog) -> Self {
        Self {
            id: b.id,
            title: b.title,
            category: b.category,
            image_url: b.image_url,
            content: b.content,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBlogRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub content: Option<String>,
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserBlogRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUserBlogResponse {
    pub message: String,
    pub blog_id: i64,
    pub blog: MyBlogItem,
}

#[derive(Debug, Serialize)]
pub struct Ack {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn joined() -> UserBlogWithAuthor {
        UserBlogWithAuthor {
            id: 5,
            title: "My first post".into(),
            category: "User Post".into(),
            image_url: "".into(),
            content: "<p>hello</p>".into(),
            created_at: datetime!(2025-05-01 08:00 UTC),
            author_id: 2,
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane@example.com".into(),
        }
    }

    #[test]
    fn full_author_includes_id_and_email() {
        let json = serde_json::to_string(&UserBlogItem::with_full_author(joined())).unwrap();
        assert!(json.contains("\"author\":{\"id\":2"));
        assert!(json.contains("jane@example.com"));
        assert!(json.contains("\"imageUrl\":\"\""));
    }

    #[test]
    fn name_only_author_hides_id_and_email() {
        let json = serde_json::to_string(&UserBlogItem::with_author_name(joined())).unwrap();
        assert!(json.contains("\"firstName\":\"Jane\""));
        assert!(!json.contains("jane@example.com"));
        assert!(!json.contains("\"id\":2"));
    }

    #[test]
    fn my_blog_item_carries_updated_at() {
        let item = MyBlogItem::from(UserBlog {
            id: 7,
            user_id: 2,
            title: "t".into(),
            category: "User Post".into(),
            image_url: "".into(),
            content: "c".into(),
            created_at: datetime!(2025-05-01 08:00 UTC),
            updated_at: datetime!(2025-05-02 09:30 UTC),
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"updatedAt\""));
        assert!(json.contains("2025-05-02"));
    }
}
