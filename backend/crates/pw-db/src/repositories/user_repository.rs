use crate::Result as DbErrorResult;

use pw_core::{CreateOutcome, Result as CoreErrorResult, UserDirectory, UserProfile};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

/// SQLite-backed user directory.
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<UserProfile>> {
        let row = sqlx::query(
            r#"
              SELECT name, email
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<UserProfile> {
            Ok(UserProfile {
                name: r.try_get("name")?,
                email: r.try_get("email")?,
            })
        })
        .transpose()
    }

    /// Insert the profile unless a row with this id exists.
    /// The conflict check and the write are one statement, so concurrent
    /// callers cannot both observe "absent".
    pub async fn create_if_absent(
        &self,
        id: &str,
        profile: &UserProfile,
    ) -> DbErrorResult<CreateOutcome> {
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO users (id, name, email, created_at)
              VALUES (?, ?, ?, ?)
              ON CONFLICT(id) DO NOTHING
              "#,
        )
        .bind(id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            Ok(CreateOutcome::Created)
        } else {
            Ok(CreateOutcome::AlreadyExists)
        }
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Liveness probe for readiness checks
    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn get(&self, uid: &str) -> CoreErrorResult<Option<UserProfile>> {
        Ok(self.find_by_id(uid).await?)
    }

    async fn create_if_absent(
        &self,
        uid: &str,
        profile: &UserProfile,
    ) -> CoreErrorResult<CreateOutcome> {
        Ok(UserRepository::create_if_absent(self, uid, profile).await?)
    }
}
