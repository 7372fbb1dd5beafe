//! Service layer for Slated
//!
//! A single facade coordinating the collaborators the shells need:
//! the account registry, the submission gateway, and the event bus.
//! All collaborators share the same database handle.
//!
//! # Example
//!
//! ```no_run
//! use libslated::service::SlatedService;
//!
//! # async fn example() -> libslated::Result<()> {
//! let service = SlatedService::new().await?;
//!
//! let mut draft = service.new_draft();
//! // ... shell mutates the draft from user input ...
//! let confirmation = service.submission().submit(&mut draft).await?;
//! println!("{}", confirmation);
//! # Ok(())
//! # }
//! ```

pub mod events;
pub mod submission;

pub use events::{Event, EventBus, EventReceiver};
pub use submission::{Confirmation, Phase, SubmissionGateway};

use std::sync::Arc;

use crate::config::Config;
use crate::db::Database;
use crate::draft::DraftPost;
use crate::identity::ConfigIdentity;
use crate::registry::AccountRegistry;
use crate::Result;

/// Main service facade
///
/// Wires the database-backed registry and store, the configured identity,
/// and the submission gateway around one shared [`Database`] handle.
pub struct SlatedService {
    db: Arc<Database>,
    config: Config,
    submission: SubmissionGateway,
    event_bus: EventBus,
}

impl SlatedService {
    /// Create a service with configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the
    /// database cannot be initialized.
    pub async fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::from_config(config).await
    }

    /// Create a service with a pre-built configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized or its
    /// migrations fail.
    pub async fn from_config(config: Config) -> Result<Self> {
        let db = Arc::new(Database::new(&config.database.path).await?);
        let event_bus = EventBus::new(100);

        let identity = Arc::new(ConfigIdentity::new(&config));
        let store: Arc<dyn crate::store::ScheduleStore> = db.clone();
        let submission = SubmissionGateway::new(store, identity, event_bus.clone());

        Ok(Self {
            db,
            config,
            submission,
            event_bus,
        })
    }

    /// A fresh draft honoring the configured form defaults
    pub fn new_draft(&self) -> DraftPost {
        let mut draft = DraftPost::new();
        draft.set_time(self.config.defaults.time.clone());
        draft.set_intent(self.config.defaults.intent);
        draft
    }

    /// The account registry collaborator
    pub fn registry(&self) -> &dyn AccountRegistry {
        self.db.as_ref()
    }

    /// The submission gateway
    pub fn submission(&self) -> &SubmissionGateway {
        &self.submission
    }

    /// Direct database access
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Subscribe to submission events
    pub fn subscribe(&self) -> EventReceiver {
        self.event_bus.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, DefaultsConfig};
    use crate::types::ContentIntent;
    use tempfile::TempDir;

    async fn setup_service() -> (SlatedService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let config = Config {
            database: DatabaseConfig {
                path: db_path.to_str().unwrap().to_string(),
            },
            identity: Some(crate::config::IdentityConfig {
                user_id: "creator-1".to_string(),
            }),
            defaults: DefaultsConfig {
                time: "09:30".to_string(),
                intent: ContentIntent::Brand,
            },
        };

        let service = SlatedService::from_config(config).await.unwrap();
        (service, temp_dir)
    }

    #[tokio::test]
    async fn test_new_draft_honors_configured_defaults() {
        let (service, _temp_dir) = setup_service().await;

        let draft = service.new_draft();
        assert_eq!(draft.time, "09:30");
        assert_eq!(draft.intent, ContentIntent::Brand);
        assert!(draft.accounts.is_empty());
    }

    #[tokio::test]
    async fn test_registry_starts_empty() {
        let (service, _temp_dir) = setup_service().await;

        let accounts = service.registry().active_accounts().await.unwrap();
        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn test_gateway_starts_idle() {
        let (service, _temp_dir) = setup_service().await;
        assert_eq!(service.submission().phase(), Phase::Idle);
    }
}
