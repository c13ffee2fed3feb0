use serde::{Deserialize, Serialize};

use crate::blogs::repo::Blog;

/// Listing entry: no content body, for payload economy.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSummary {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub date: String,
    pub read_time: String,
    pub image: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetails {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub date: String,
    pub read_time: String,
    pub image: String,
    pub content: String,
}

impl From<Blog> for BlogSummary {
    fn from(b: Blog) -> Self {
        Self {
            id: b.id,
            title: b.title,
            category: b.category,
            date: b.date,
            read_time: b.read_time,
            image: b.image_url,
        }
    }
}

impl From<Blog> for BlogDetails {
    fn from(b: Blog) -> Self {
        Self {
            id: b.id,
            title: b.title,
            category: b.category,
            date: b.date,
            read_time: b.read_time,
            image: b.image_url,
            content: b.content,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub content: Option<String>,
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBlogResponse {
    pub message: String,
    pub blog_id: i64,
    pub blog: BlogDetails,
}

#[derive(Debug, Serialize)]
pub struct Ack {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample() -> Blog {
        Blog {
            id: 12,
            title: "Choosing a Stack".into(),
            category: "Startups".into(),
            date: "April 4, 2025".into(),
            read_time: "4 min read".into(),
            image_url: "https://images.example/stack.jpg".into(),
            content: "<h1>Stacks</h1>".into(),
            created_at: datetime!(2025-04-04 09:00 UTC),
        }
    }

    #[test]
    fn summary_omits_content() {
        let json = serde_json::to_string(&BlogSummary::from(sample())).unwrap();
        assert!(json.contains("\"readTime\":\"4 min read\""));
        assert!(json.contains("\"image\":"));
        assert!(!json.contains("content"));
    }

    #[test]
    fn details_include_content() {
        let json = serde_json::to_string(&BlogDetails::from(sample())).unwrap();
        assert!(json.contains("\"content\":\"<h1>Stacks</h1>\""));
    }

    #[test]
    fn update_request_distinguishes_absent_and_empty() {
        let req: UpdateBlogRequest =
            serde_json::from_str(r#"{"imageUrl":"","title":"New"}"#).unwrap();
        assert_eq!(req.image_url.as_deref(), Some(""));
        assert_eq!(req.title.as_deref(), Some("New"));
        assert!(req.content.is_none());
    }
}
