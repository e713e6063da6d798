//! Identity lookup collaborator.
//!
//! The retrieval core does not depend on this; it stands in for the
//! external identity service behind the login route. Lookups either find a
//! user record or report a typed "not found" via `Ok(None)`.

pub mod handlers;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity backend unavailable: {0}")]
    Unavailable(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, IdentityError>;
}

/// In-memory stand-in for the external identity service, seeded from
/// configuration at startup.
pub struct StaticIdentityProvider {
    users: HashMap<String, UserRecord>,
}

impl StaticIdentityProvider {
    pub fn new(emails: impl IntoIterator<Item = String>) -> Self {
        let users = emails
            .into_iter()
            .map(|email| {
                let email = email.trim().to_ascii_lowercase();
                (
                    email.clone(),
                    UserRecord {
                        id: Uuid::new_v4(),
                        email,
                    },
                )
            })
            .collect();
        Self { users }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, IdentityError> {
        Ok(self.users.get(&email.to_ascii_lowercase()).cloned())
    }
}
