//! Identity collaborator
//!
//! Submissions are attributed to the current authenticated user. The
//! gateway treats a missing identity as an authentication failure, so the
//! provider returns an `Option` rather than erroring on "nobody signed
//! in".

use async_trait::async_trait;

use crate::config::Config;
use crate::error::Result;
use crate::types::UserIdentity;

/// Query for the current authenticated user
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The current user, or `None` if nobody is signed in
    async fn current_user(&self) -> Result<Option<UserIdentity>>;
}

/// Identity taken from the `[identity]` section of the config file
pub struct ConfigIdentity {
    user_id: Option<String>,
}

impl ConfigIdentity {
    pub fn new(config: &Config) -> Self {
        Self {
            user_id: config.identity.as_ref().map(|i| i.user_id.clone()),
        }
    }
}

#[async_trait]
impl IdentityProvider for ConfigIdentity {
    async fn current_user(&self) -> Result<Option<UserIdentity>> {
        Ok(self.user_id.clone().map(UserIdentity::new))
    }
}

/// Fixed identity for tests: present or absent
pub struct MemoryIdentity {
    user: Option<UserIdentity>,
}

impl MemoryIdentity {
    pub fn signed_in(user_id: &str) -> Self {
        Self {
            user: Some(UserIdentity::new(user_id)),
        }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentity {
    async fn current_user(&self) -> Result<Option<UserIdentity>> {
        Ok(self.user.clone())
    }
}
