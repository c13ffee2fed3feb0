use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument};

use crate::auth::jwt::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

use super::dto::{Ack, BlogDetails, BlogSummary, CreateBlogRequest, CreatedBlogResponse, UpdateBlogRequest};
use super::repo::Blog;
use super::services::{display_date, read_time};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_blogs).post(create_blog))
        .route(
            "/blogs/:id",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
}

#[instrument(skip(state))]
pub async fn list_blogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogSummary>>, ApiError> {
    let blogs = Blog::list(&state.db).await?;
    Ok(Json(blogs.into_iter().map(BlogSummary::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BlogDetails>, ApiError> {
    let blog = Blog::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog post not found".into()))?;
    Ok(Json(blog.into()))
}

/// Editorial content is collectively admin-owned: any authenticated user may
/// create, update, or delete it. There is no per-post ownership.
#[instrument(skip(state, payload))]
pub async fn create_blog(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<CreatedBlogResponse>), ApiError> {
    let (title, content) = match (
        payload.title.filter(|v| !v.is_empty()),
        payload.content.filter(|v| !v.is_empty()),
    ) {
        (Some(t), Some(c)) => (t, c),
        _ => {
            return Err(ApiError::Validation(
                "Title and content are required".into(),
            ))
        }
    };

    let category = payload.category.unwrap_or_else(|| "General".into());
    let image_url = payload.image_url.unwrap_or_default();
    let date = display_date(OffsetDateTime::now_utc());
    let read_time = read_time(&content);

    let blog = Blog::create(
        &state.db, &title, &category, &date, &read_time, &image_url, &content,
    )
    .await?;

    info!(blog_id = %blog.id, user_id = %claims.sub, "editorial blog created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedBlogResponse {
            message: "Blog created successfully".into(),
            blog_id: blog.id,
            blog: blog.into(),
        }),
    ))
}

// Empty strings keep the stored value too, so a partial update can never
// blank out a required field.
fn merged(new: Option<String>, old: &str) -> String {
    new.filter(|v| !v.is_empty())
        .unwrap_or_else(|| old.to_string())
}

#[instrument(skip(state, payload))]
pub async fn update_blog(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBlogRequest>,
) -> Result<Json<Ack>, ApiError> {
    let existing = Blog::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog not found".into()))?;

    let title = merged(payload.title, &existing.title);
    let category = merged(payload.category, &existing.category);
    // The image may be cleared outright; a supplied value always wins.
    let image_url = payload
        .image_url
        .unwrap_or_else(|| existing.image_url.clone());
    let content = merged(payload.content, &existing.content);
    let read_time = read_time(&content);

    existing
        .update(&state.db, &title, &category, &image_url, &content, &read_time)
        .await?;

    info!(blog_id = %id, user_id = %claims.sub, "editorial blog updated");
    Ok(Json(Ack {
        message: "Blog updated successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_blog(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Ack>, ApiError> {
    if !Blog::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Blog not found".into()));
    }
    info!(blog_id = %id, user_id = %claims.sub, "editorial blog deleted");
    Ok(Json(Ack {
        message: "Blog deleted successfully".into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_keeps_old_value_when_absent() {
        assert_eq!(merged(None, "old"), "old");
    }

    #[test]
    fn merged_keeps_old_value_when_empty() {
        assert_eq!(merged(Some(String::new()), "old"), "old");
    }

    #[test]
    fn merged_takes_new_non_empty_value() {
        assert_eq!(merged(Some("new".into()), "old"), "new");
    }
}
