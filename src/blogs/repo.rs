use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// Editorial post: platform-authored, no individual owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub date: String,
    pub read_time: String,
    pub image_url: String,
    pub content: String,
    pub created_at: OffsetDateTime,
}

impl Blog {
    pub async fn list(db: &PgPool) -> anyhow::Result<Vec<Blog>> {
        let rows = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, category, date, read_time, image_url, content, created_at
            FROM blogs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: i64) -> anyhow::Result<Option<Blog>> {
        let row = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, category, date, read_time, image_url, content, created_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn create(
        db: &PgPool,
        title: &str,
        category: &str,
        date: &str,
        read_time: &str,
        image_url: &str,
        content: &str,
    ) -> anyhow::Result<Blog> {
        let row = sqlx::query_as::<_, Blog>(
            r#"
            INSERT INTO blogs (title, category, date, read_time, image_url, content)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, category, date, read_time, image_url, content, created_at
            "#,
        )
        .bind(title)
        .bind(category)
        .bind(date)
        .bind(read_time)
        .bind(image_url)
        .bind(content)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Full-row update with the merged field values; the display date is
    /// never rewritten after creation.
    pub async fn update(
        &self,
        db: &PgPool,
        title: &str,
        category: &str,
        image_url: &str,
        content: &str,
        read_time: &str,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE blogs
            SET title = $1, category = $2, image_url = $3, content = $4, read_time = $5
            WHERE id = $6
            "#,
        )
        .bind(title)
        .bind(category)
        .bind(image_url)
        .bind(content)
        .bind(read_time)
        .bind(self.id)
        .execute(db)
        .await?;
        Ok(())
    }

    /// Returns false when no row matched.
    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(db: &PgPool) -> anyhow::Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blogs")
            .fetch_one(db)
            .await?;
        Ok(count)
    }
}
