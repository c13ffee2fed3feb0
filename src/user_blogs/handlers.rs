use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::auth::jwt::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

use super::dto::{
    Ack, CreateUserBlogRequest, CreatedUserBlogResponse, MyBlogItem, UpdateUserBlogRequest,
    UserBlogItem,
};
use super::repo::{UserBlog, UserBlogWithAuthor};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user-blogs", get(list_user_blogs).post(create_user_blog))
        .route("/user-blogs/user/:user_id", get(list_blogs_by_author))
        .route("/user-blogs/my-blogs", get(list_my_blogs))
        .route(
            "/user-blogs/:id",
            get(get_user_blog)
                .put(update_user_blog)
                .delete(delete_user_blog),
        )
}

#[instrument(skip(state))]
pub async fn list_user_blogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserBlogItem>>, ApiError> {
    let blogs = UserBlogWithAuthor::list(&state.db).await?;
    Ok(Json(
        blogs
            .into_iter()
            .map(UserBlogItem::with_full_author)
            .collect(),
    ))
}

#[instrument(skip(state))]
pub async fn list_blogs_by_author(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<UserBlogItem>>, ApiError> {
    let blogs = UserBlogWithAuthor::list_by_author(&state.db, user_id).await?;
    Ok(Json(
        blogs
            .into_iter()
            .map(UserBlogItem::with_author_name)
            .collect(),
    ))
}

#[instrument(skip(state))]
pub async fn list_my_blogs(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<MyBlogItem>>, ApiError> {
    let blogs = UserBlog::list_mine(&state.db, claims.sub).await?;
    Ok(Json(blogs.into_iter().map(MyBlogItem::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_user_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserBlogItem>, ApiError> {
    let blog = UserBlogWithAuthor::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog post not found".into()))?;
    Ok(Json(UserBlogItem::with_full_author(blog)))
}

#[instrument(skip(state, payload))]
pub async fn create_user_blog(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateUserBlogRequest>,
) -> Result<(StatusCode, Json<CreatedUserBlogResponse>), ApiError> {
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

    let category = payload.category.unwrap_or_else(|| "User Post".into());
    let image_url = payload.image_url.unwrap_or_default();

    let blog = UserBlog::create(&state.db, claims.sub, &title, &category, &image_url, &content)
        .await?;

    info!(blog_id = %blog.id, user_id = %claims.sub, "user blog created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedUserBlogResponse {
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
pub async fn update_user_blog(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserBlogRequest>,
) -> Result<Json<Ack>, ApiError> {
    // 404 whether the post is missing or owned by someone else, so other
    // users' posts are not revealed to exist.
    let existing = match UserBlog::find_owned(&state.db, id, claims.sub).await? {
        Some(b) => b,
        None => {
            warn!(blog_id = %id, user_id = %claims.sub, "update on missing or foreign blog");
            return Err(ApiError::NotFound("Blog not found or unauthorized".into()));
        }
    };

    let title = merged(payload.title, &existing.title);
    let category = merged(payload.category, &existing.category);
    // The image may be cleared outright; a supplied value always wins.
    let image_url = payload
        .image_url
        .unwrap_or_else(|| existing.image_url.clone());
    let content = merged(payload.content, &existing.content);

    existing
        .update(&state.db, &title, &category, &image_url, &content)
        .await?;

    info!(blog_id = %id, user_id = %claims.sub, "user blog updated");
    Ok(Json(Ack {
        message: "Blog updated successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_user_blog(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Ack>, ApiError> {
    if !UserBlog::delete(&state.db, id, claims.sub).await? {
        warn!(blog_id = %id, user_id = %claims.sub, "delete on missing or foreign blog");
        return Err(ApiError::NotFound("Blog not found or unauthorized".into()));
    }
    info!(blog_id = %id, user_id = %claims.sub, "user blog deleted");
    Ok(Json(Ack {
        message: "Blog deleted successfully".into(),
    }))
}
