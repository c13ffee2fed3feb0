use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// Community post: owned by exactly one registered user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserBlog {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub content: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Post joined with the author's public fields.
#[derive(Debug, Clone, FromRow)]
pub struct UserBlogWithAuthor {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub content: String,
    pub created_at: OffsetDateTime,
    pub author_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserBlog {
    pub async fn create(
        db: &PgPool,
        user_id: i64,
        title: &str,
        category: &str,
        image_url: &str,
        content: &str,
    ) -> anyhow::Result<UserBlog> {
        let row = sqlx::query_as::<_, UserBlog>(
            r#"
            INSERT INTO user_blogs (user_id, title, category, image_url, content)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, category, image_url, content, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(category)
        .bind(image_url)
        .bind(content)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Fetch a post only if it belongs to `user_id`. The caller cannot tell
    /// a missing post from someone else's post.
    pub async fn find_owned(
        db: &PgPool,
        id: i64,
        user_id: i64,
    ) -> anyhow::Result<Option<UserBlog>> {
        let row = sqlx::query_as::<_, UserBlog>(
            r#"
            SELECT id, user_id, title, category, image_url, content, created_at, updated_at
            FROM user_blogs
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn list_mine(db: &PgPool, user_id: i64) -> anyhow::Result<Vec<UserBlog>> {
        let rows = sqlx::query_as::<_, UserBlog>(
            r#"
            SELECT id, user_id, title, category, image_url, content, created_at, updated_at
            FROM user_blogs
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn update(
        &self,
        db: &PgPool,
        title: &str,
        category: &str,
        image_url: &str,
        content: &str,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE user_blogs
            SET title = $1, category = $2, image_url = $3, content = $4, updated_at = now()
            WHERE id = $5 AND user_id = $6
            "#,
        )
        .bind(title)
        .bind(category)
        .bind(image_url)
        .bind(content)
        .bind(self.id)
        .bind(self.user_id)
        .execute(db)
        .await?;
        Ok(())
    }

    /// Ownership-scoped delete; false when nothing matched, whether the post
    /// is missing or owned by someone else.
    pub async fn delete(db: &PgPool, id: i64, user_id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM user_blogs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl UserBlogWithAuthor {
    pub async fn list(db: &PgPool) -> anyhow::Result<Vec<UserBlogWithAuthor>> {
        let rows = sqlx::query_as::<_, UserBlogWithAuthor>(
            r#"
            SELECT ub.id, ub.title, ub.category, ub.image_url, ub.content, ub.created_at,
                   u.id AS author_id, u.first_name, u.last_name, u.email
            FROM user_blogs ub
            JOIN users u ON ub.user_id = u.id
            ORDER BY ub.created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn list_by_author(
        db: &PgPool,
        user_id: i64,
    ) -> anyhow::Result<Vec<UserBlogWithAuthor>> {
        let rows = sqlx::query_as::<_, UserBlogWithAuthor>(
            r#"
            SELECT ub.id, ub.title, ub.category, ub.image_url, ub.content, ub.created_at,
                   u.id AS author_id, u.first_name, u.last_name, u.email
            FROM user_blogs ub
            JOIN users u ON ub.user_id = u.id
            WHERE ub.user_id = $1
            ORDER BY ub.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: i64) -> anyhow::Result<Option<UserBlogWithAuthor>> {
        let row = sqlx::query_as::<_, UserBlogWithAuthor>(
            r#"
            SELECT ub.id, ub.title, ub.category, ub.image_url, ub.content, ub.created_at,
                   u.id AS author_id, u.first_name, u.last_name, u.email
            FROM user_blogs ub
            JOIN users u ON ub.user_id = u.id
            WHERE ub.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
