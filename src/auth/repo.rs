use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::repo_types::{User, UserRole};

impl User {
    /// Find a user by exact email match.
    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name, role, created_at, last_login
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name, role, created_at, last_login
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with a hashed password.
    pub async fn create(
        db: &PgPool,
        email: &str,
        password_hash: &str,
        name: &str,
        role: UserRole,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, name, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, name, role, created_at, last_login
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .bind(role)
        .fetch_one(db)
        .await
    }

    /// Stamp last_login. Callers treat a failure here as non-fatal.
    pub async fn touch_last_login(db: &PgPool, id: Uuid) -> sqlx::Result<()> {
        sqlx::query(r#"UPDATE users SET last_login = now() WHERE id = $1"#)
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
