//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, ErrorCode, Permission, PermissionSet, Timestamp, UserId,
};
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

use super::db_error;

/// PostgreSQL implementation of the UserRepository port.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    name: String,
    password_hash: String,
    permissions: Vec<String>,
    reset_token: Option<String>,
    reset_token_expiry: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let labels = row
            .permissions
            .iter()
            .map(|s| s.parse::<Permission>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid permission: {}", e))
            })?;
        let permissions = PermissionSet::new(labels).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid permission set: {}", e))
        })?;

        Ok(User {
            id: UserId::from_uuid(row.id),
            email: row.email,
            name: row.name,
            password_hash: row.password_hash,
            permissions,
            reset_token: row.reset_token,
            reset_token_expiry: row.reset_token_expiry.map(Timestamp::from_datetime),
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn permissions_to_strings(permissions: &PermissionSet) -> Vec<String> {
    permissions.labels().iter().map(|p| p.as_str().to_string()).collect()
}

const USER_COLUMNS: &str =
    "id, email, name, password_hash, permissions, reset_token, reset_token_expiry, created_at";

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let row: UserRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO users (id, email, name, password_hash, permissions, created_at)
            VALUES ($1, $2, $3, $4, $5, now())
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(permissions_to_strings(&user.permissions))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("users_email_key") {
                    return DomainError::validation(
                        "email",
                        format!("An account already exists for {}", user.email),
                    );
                }
            }
            db_error("Failed to create user", e)
        })?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("Failed to load user", e))?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS))
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("Failed to load user by email", e))?;

        row.map(TryInto::try_into).transpose()
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> =
            sqlx::query_as(&format!("SELECT {} FROM users ORDER BY created_at", USER_COLUMNS))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| db_error("Failed to list users", e))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn set_reset_token(
        &self,
        id: &UserId,
        token: &str,
        expiry: Timestamp,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE users SET reset_token = $2, reset_token_expiry = $3 WHERE id = $1",
        )
        .bind(id.as_uuid())
        .bind(token)
        .bind(expiry.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to store reset token", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User"));
        }
        Ok(())
    }

    async fn consume_reset_token(
        &self,
        token: &str,
        cutoff: Timestamp,
        new_password_hash: &str,
    ) -> Result<Option<User>, DomainError> {
        // Single conditional update: match, rotate, clear. Concurrent
        // consumers race on the row and only one can match.
        let row: Option<UserRow> = sqlx::query_as(&format!(
            r#"
            UPDATE users
            SET password_hash = $2, reset_token = NULL, reset_token_expiry = NULL
            WHERE reset_token = $1 AND reset_token_expiry >= $3
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(token)
        .bind(new_password_hash)
        .bind(cutoff.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to consume reset token", e))?;

        row.map(TryInto::try_into).transpose()
    }

    async fn update_permissions(
        &self,
        id: &UserId,
        permissions: PermissionSet,
    ) -> Result<User, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "UPDATE users SET permissions = $2 WHERE id = $1 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(permissions_to_strings(&permissions))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update permissions", e))?;

        row.ok_or_else(|| DomainError::not_found("User"))?.try_into()
    }
}
