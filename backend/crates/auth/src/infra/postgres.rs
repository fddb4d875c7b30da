//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> AuthResult<User> {
        let result = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (
                email,
                name,
                avatar_url,
                federated_id,
                password_hash
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING
                user_id,
                email,
                name,
                avatar_url,
                federated_id,
                password_hash,
                refresh_token,
                created_at,
                updated_at
            "#,
        )
        .bind(new_user.email.as_str())
        .bind(&new_user.name)
        .bind(&new_user.avatar_url)
        .bind(&new_user.federated_id)
        .bind(new_user.password_hash.as_ref().map(|p| p.as_phc_string()))
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => row.into_user(),
            Err(sqlx::Error::Database(db)) if db.code().as_deref() == Some("23505") => {
                Err(AuthError::AlreadyRegistered)
            }
            Err(e) => Err(AuthError::from(e)),
        }
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                name,
                avatar_url,
                federated_id,
                password_hash,
                refresh_token,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                name,
                avatar_url,
                federated_id,
                password_hash,
                refresh_token,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_federated_id(&self, federated_id: &str) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                name,
                avatar_url,
                federated_id,
                password_hash,
                refresh_token,
                created_at,
                updated_at
            FROM users
            WHERE federated_id = $1
            "#,
        )
        .bind(federated_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        // The refresh token slot is only ever written by the dedicated
        // token methods below
        sqlx::query(
            r#"
            UPDATE users SET
                email = $2,
                name = $3,
                avatar_url = $4,
                federated_id = $5,
                password_hash = $6,
                updated_at = $7
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_i64())
        .bind(user.email.as_str())
        .bind(&user.name)
        .bind(&user.avatar_url)
        .bind(&user.federated_id)
        .bind(user.password_hash.as_ref().map(|p| p.as_phc_string()))
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn store_refresh_token(&self, user_id: &UserId, token: &str) -> AuthResult<bool> {
        let rows = sqlx::query(
            r#"
            UPDATE users SET
                refresh_token = $2,
                updated_at = now()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .bind(token)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows > 0)
    }

    async fn rotate_refresh_token(
        &self,
        user_id: &UserId,
        previous: &str,
        next: &str,
    ) -> AuthResult<bool> {
        // Compare-and-swap; the WHERE clause decides the race
        let rows = sqlx::query(
            r#"
            UPDATE users SET
                refresh_token = $3,
                updated_at = now()
            WHERE user_id = $1 AND refresh_token = $2
            "#,
        )
        .bind(user_id.as_i64())
        .bind(previous)
        .bind(next)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows > 0)
    }

    async fn clear_refresh_token(&self, user_id: &UserId) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                refresh_token = NULL,
                updated_at = now()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    email: String,
    name: Option<String>,
    avatar_url: Option<String>,
    federated_id: Option<String>,
    password_hash: Option<String>,
    refresh_token: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = self
            .password_hash
            .map(UserPassword::from_phc_string)
            .transpose()?;

        Ok(User {
            user_id: UserId::from_i64(self.user_id),
            email: Email::from_db(self.email),
            name: self.name,
            avatar_url: self.avatar_url,
            federated_id: self.federated_id,
            password_hash,
            refresh_token: self.refresh_token,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
