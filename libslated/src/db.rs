//! Database operations for Slated

use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use std::path::Path;

use crate::error::{RegistryError, Result, StoreError};
use crate::types::{Account, ContentIntent, Platform, PostType, ScheduledPostRecord};

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection
    pub async fn new(db_path: &str) -> Result<Self> {
        // Expand path and create parent directories
        let expanded_path = shellexpand::tilde(db_path).to_string();
        let path = Path::new(&expanded_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StoreError::IoError)?;
        }

        // Forward slashes work in SQLite URLs on both Windows and Unix;
        // mode=rwc creates the database file if it doesn't exist
        let db_url = format!("sqlite://{}?mode=rwc", expanded_path.replace('\\', "/"));

        let pool = SqlitePool::connect(&db_url)
            .await
            .map_err(StoreError::SqlxError)?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(StoreError::MigrationError)?;

        Ok(Self { pool })
    }

    /// Insert a full batch of scheduled rows in one transaction
    ///
    /// All-or-nothing: if any insert fails, the transaction rolls back and
    /// no rows remain visible.
    pub async fn insert_scheduled_batch(&self, records: &[ScheduledPostRecord]) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(StoreError::SqlxError)?;

        for record in records {
            sqlx::query(
                r#"
                INSERT INTO scheduled_posts
                    (id, user_id, caption, account_id, platform, post_type,
                     scheduled_at, scheduled_time, notes, intent, is_experiment, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&record.id)
            .bind(&record.user_id)
            .bind(&record.caption)
            .bind(&record.account_id)
            .bind(record.platform.as_tag())
            .bind(record.post_type.as_tag())
            .bind(record.scheduled_at)
            .bind(&record.scheduled_time)
            .bind(&record.notes)
            .bind(record.intent.as_tag())
            .bind(if record.is_experiment { 1 } else { 0 })
            .bind(record.created_at)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::SqlxError)?;
        }

        tx.commit().await.map_err(StoreError::SqlxError)?;

        Ok(())
    }

    /// List scheduled rows, soonest first
    pub async fn list_scheduled(&self, limit: usize) -> Result<Vec<ScheduledPostRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, caption, account_id, platform, post_type,
                   scheduled_at, scheduled_time, notes, intent, is_experiment, created_at
            FROM scheduled_posts
            ORDER BY scheduled_at ASC
            LIMIT ?
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::SqlxError)?;

        rows.into_iter()
            .map(|r| {
                let platform_tag: String = r.get("platform");
                let platform = Platform::from_tag(&platform_tag)
                    .ok_or(RegistryError::UnknownTag(platform_tag))?;

                let type_tag: String = r.get("post_type");
                let post_type =
                    PostType::from_tag(&type_tag).ok_or(RegistryError::UnknownTag(type_tag))?;

                let intent_tag: String = r.get("intent");
                let intent = ContentIntent::from_tag(&intent_tag)
                    .ok_or(RegistryError::UnknownTag(intent_tag))?;

                Ok(ScheduledPostRecord {
                    id: r.get("id"),
                    user_id: r.get("user_id"),
                    caption: r.get("caption"),
                    account_id: r.get("account_id"),
                    platform,
                    post_type,
                    scheduled_at: r.get("scheduled_at"),
                    scheduled_time: r.get("scheduled_time"),
                    notes: r.get("notes"),
                    intent,
                    is_experiment: r.get::<i64, _>("is_experiment") != 0,
                    created_at: r.get("created_at"),
                })
            })
            .collect()
    }

    /// Count all scheduled rows
    pub async fn count_scheduled(&self) -> Result<usize> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM scheduled_posts")
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::SqlxError)?;

        Ok(row.get::<i64, _>("n") as usize)
    }

    /// Fetch the active channel accounts, ordered by account identifier
    ///
    /// Platform tags are parsed here, at the registry boundary; a row with
    /// an unknown tag is an error rather than an untyped pass-through.
    pub async fn active_channels(&self) -> Result<Vec<Account>> {
        let rows = sqlx::query(
            r#"
            SELECT id, account, platform, is_active
            FROM channels
            WHERE is_active = 1
            ORDER BY account
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(RegistryError::Query)?;

        rows.into_iter()
            .map(|r| {
                let tag: String = r.get("platform");
                let platform =
                    Platform::from_tag(&tag).ok_or(RegistryError::UnknownTag(tag))?;
                Ok(Account {
                    id: r.get("account"),
                    platform,
                })
            })
            .collect()
    }

    /// Register a channel account
    pub async fn add_channel(&self, account: &Account, active: bool) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO channels (id, account, platform, is_active)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(&account.id)
        .bind(account.platform.as_tag())
        .bind(if active { 1 } else { 0 })
        .execute(&self.pool)
        .await
        .map_err(RegistryError::Query)?;

        Ok(())
    }

    /// Insert a raw channel row, bypassing tag validation
    ///
    /// Only used by tests to simulate registry rows written by other
    /// clients.
    #[doc(hidden)]
    pub async fn add_channel_raw(&self, account: &str, platform_tag: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO channels (id, account, platform, is_active)
            VALUES (?, ?, ?, 1)
            "#,
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(account)
        .bind(platform_tag)
        .execute(&self.pool)
        .await
        .map_err(RegistryError::Query)?;

        Ok(())
    }
}
