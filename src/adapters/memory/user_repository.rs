//! In-memory `UserRepository`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{
    DomainError, ErrorCode, PermissionSet, Timestamp, UserId,
};
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

/// Vec-backed user store.
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    fail: AtomicBool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent call fail with a database error.
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    /// Seeds a pre-built user (tests).
    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated user store failure",
            ));
        }
        Ok(())
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::validation(
                "email",
                format!("An account already exists for {}", user.email),
            ));
        }
        let created = User {
            id: UserId::new(),
            email: user.email,
            name: user.name,
            password_hash: user.password_hash,
            permissions: user.permissions,
            reset_token: None,
            reset_token_expiry: None,
            created_at: Timestamp::now(),
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.check_failure()?;
        Ok(self.users.lock().unwrap().iter().find(|u| &u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.check_failure()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.check_failure()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn set_reset_token(
        &self,
        id: &UserId,
        token: &str,
        expiry: Timestamp,
    ) -> Result<(), DomainError> {
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| DomainError::not_found("User"))?;
        user.reset_token = Some(token.to_string());
        user.reset_token_expiry = Some(expiry);
        Ok(())
    }

    async fn consume_reset_token(
        &self,
        token: &str,
        cutoff: Timestamp,
        new_password_hash: &str,
    ) -> Result<Option<User>, DomainError> {
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();
        let matched = users.iter_mut().find(|u| {
            u.reset_token.as_deref() == Some(token)
                && u.reset_token_expiry
                    .map(|expiry| !expiry.is_before(&cutoff))
                    .unwrap_or(false)
        });
        Ok(matched.map(|user| {
            user.password_hash = new_password_hash.to_string();
            user.reset_token = None;
            user.reset_token_expiry = None;
            user.clone()
        }))
    }

    async fn update_permissions(
        &self,
        id: &UserId,
        permissions: PermissionSet,
    ) -> Result<User, DomainError> {
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| DomainError::not_found("User"))?;
        user.permissions = permissions;
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            name: "Test".into(),
            password_hash: "hash".into(),
            permissions: PermissionSet::standard(),
        }
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("a@b.c")).await.unwrap();

        let err = repo.create(new_user("a@b.c")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn consume_reset_token_is_single_use() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(new_user("a@b.c")).await.unwrap();
        repo.set_reset_token(&user.id, "tok", Timestamp::now().plus_secs(3600))
            .await
            .unwrap();

        let cutoff = Timestamp::now().minus_secs(3600);
        let first = repo.consume_reset_token("tok", cutoff, "new").await.unwrap();
        assert!(first.is_some());

        let second = repo.consume_reset_token("tok", cutoff, "new").await.unwrap();
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn consume_reset_token_respects_cutoff() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(new_user("a@b.c")).await.unwrap();
        // Expiry already older than the cutoff window.
        repo.set_reset_token(&user.id, "tok", Timestamp::now().minus_secs(7200))
            .await
            .unwrap();

        let cutoff = Timestamp::now().minus_secs(3600);
        let got = repo.consume_reset_token("tok", cutoff, "new").await.unwrap();
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn failing_mode_surfaces_database_error() {
        let repo = InMemoryUserRepository::new();
        repo.set_failing(true);
        let err = repo.find_by_email("a@b.c").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
