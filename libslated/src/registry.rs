//! Account registry collaborator
//!
//! The registry is the read-only source of selectable platform accounts.
//! Implementations return active accounts ordered by identifier, with
//! platform tags already parsed into the closed [`Platform`] enum; unknown
//! tags never leave the boundary.

use async_trait::async_trait;

use crate::db::Database;
use crate::error::Result;
use crate::types::{Account, Platform};

/// Read-only query for selectable accounts
#[async_trait]
pub trait AccountRegistry: Send + Sync {
    /// Active accounts, ordered by account identifier
    async fn active_accounts(&self) -> Result<Vec<Account>>;
}

#[async_trait]
impl AccountRegistry for Database {
    async fn active_accounts(&self) -> Result<Vec<Account>> {
        self.active_channels().await
    }
}

/// Fixed in-memory registry for tests and offline shells
pub struct MemoryRegistry {
    accounts: Vec<Account>,
}

impl MemoryRegistry {
    /// Build a registry from a fixed account list; ordering by identifier
    /// is applied here so the trait contract holds
    pub fn new(mut accounts: Vec<Account>) -> Self {
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        Self { accounts }
    }

    /// A small registry covering several platforms, for demos and tests
    pub fn sample() -> Self {
        Self::new(vec![
            Account::new("@tiktok_main", Platform::TikTok),
            Account::new("@tiktok_gym", Platform::TikTok),
            Account::new("@ig_main", Platform::InstagramReels),
            Account::new("@ig_quotes", Platform::InstagramReels),
            Account::new("@yt_ai", Platform::YouTubeShorts),
            Account::new("@fb_main", Platform::FacebookReels),
            Account::new("@x_main", Platform::Twitter),
            Account::new("@snap_ai", Platform::Snapchat),
        ])
    }
}

#[async_trait]
impl AccountRegistry for MemoryRegistry {
    async fn active_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.clone())
    }
}
