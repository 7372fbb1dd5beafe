//! Submission gateway: validate, expand, persist
//!
//! The gateway is the single boundary where a draft becomes persisted
//! rows. Every error kind is terminal to the current attempt and handled
//! here; nothing propagates past the gateway except the returned `Result`.

use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use super::events::{Event, EventBus};
use crate::draft::DraftPost;
use crate::error::{RejectReason, Result, SlatedError};
use crate::expand::expand;
use crate::identity::IdentityProvider;
use crate::store::ScheduleStore;

/// Where a submission attempt currently is
///
/// `Idle -> Validating -> Persisting -> Idle` on the happy path; a
/// rejection or failure returns to `Idle` directly. While the phase is not
/// `Idle`, further submit calls are rejected (the shell disables its
/// submit control for the duration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Persisting,
}

/// What a successful submission tells the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// Total records created
    pub records: usize,
    /// Distinct accounts covered
    pub accounts: usize,
    /// Scheduled date
    pub date: NaiveDate,
    /// Scheduled time of day, verbatim
    pub time: String,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scheduled {} post(s) across {} account(s) for {} at {}",
            self.records, self.accounts, self.date, self.time
        )
    }
}

/// The submission gateway
///
/// Owns the per-attempt phase; shared collaborators are injected so the
/// shell and tests can swap the SQL store for in-memory ones.
pub struct SubmissionGateway {
    store: Arc<dyn ScheduleStore>,
    identity: Arc<dyn IdentityProvider>,
    event_bus: EventBus,
    phase: Mutex<Phase>,
}

impl SubmissionGateway {
    pub fn new(
        store: Arc<dyn ScheduleStore>,
        identity: Arc<dyn IdentityProvider>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            store,
            identity,
            event_bus,
            phase: Mutex::new(Phase::Idle),
        }
    }

    /// Current phase of the gateway
    pub fn phase(&self) -> Phase {
        *self.phase.lock().unwrap()
    }

    /// Submit a draft: validate, expand, persist one atomic batch
    ///
    /// On success the draft is reset to its empty initial state. On any
    /// rejection or failure the draft is left untouched so the user can
    /// correct and retry. At most one submission may be in flight; a
    /// second call while one is running is rejected.
    ///
    /// # Errors
    ///
    /// - `Submission(MissingMedia | NoAccounts | NoPostTypes)` when a
    ///   precondition fails (checked in that order, before any external
    ///   call)
    /// - `Submission(InFlight)` when another attempt is running
    /// - `Auth` when no user is signed in
    /// - `InvalidInput` when the schedule cannot be combined
    /// - `Store` when the batch insert fails
    pub async fn submit(&self, draft: &mut DraftPost) -> Result<Confirmation> {
        {
            let mut phase = self.phase.lock().unwrap();
            if *phase != Phase::Idle {
                return Err(RejectReason::InFlight.into());
            }
            *phase = Phase::Validating;
        }

        let result = self.run(draft).await;

        *self.phase.lock().unwrap() = Phase::Idle;

        result
    }

    async fn run(&self, draft: &mut DraftPost) -> Result<Confirmation> {
        // Fail-fast preconditions, in order: media, accounts, post types.
        // Zero external calls happen before these pass.
        if draft.media.is_none() {
            return Err(self.reject(RejectReason::MissingMedia));
        }
        if draft.accounts.is_empty() {
            return Err(self.reject(RejectReason::NoAccounts));
        }
        if draft.post_types.is_empty() {
            return Err(self.reject(RejectReason::NoPostTypes));
        }

        let user = match self.identity.current_user().await? {
            Some(user) => user,
            None => {
                let error = SlatedError::Auth(
                    "no authenticated user; sign in or configure [identity]".to_string(),
                );
                self.event_bus.emit(Event::SubmissionFailed {
                    error: error.to_string(),
                });
                return Err(error);
            }
        };

        let scheduled_at = draft.schedule().combine()?;

        self.event_bus.emit(Event::SubmissionStarted {
            accounts: draft.accounts.len(),
            post_types: draft.post_types.len(),
        });

        let records = expand(draft, &user, scheduled_at, Utc::now());

        *self.phase.lock().unwrap() = Phase::Persisting;

        match self.store.insert_batch(&records).await {
            Ok(()) => {
                let confirmation = Confirmation {
                    records: records.len(),
                    accounts: draft.accounts.len(),
                    date: draft.date,
                    time: draft.time.clone(),
                };

                info!(
                    records = confirmation.records,
                    accounts = confirmation.accounts,
                    user = %user.user_id,
                    "scheduled batch persisted"
                );
                self.event_bus.emit(Event::SubmissionCompleted {
                    records: confirmation.records,
                    accounts: confirmation.accounts,
                    scheduled_for: format!("{} {}", confirmation.date, confirmation.time),
                });

                draft.reset();

                Ok(confirmation)
            }
            Err(error) => {
                warn!(%error, "scheduled batch failed to persist");
                self.event_bus.emit(Event::SubmissionFailed {
                    error: error.to_string(),
                });
                Err(error)
            }
        }
    }

    fn reject(&self, reason: RejectReason) -> SlatedError {
        self.event_bus.emit(Event::SubmissionRejected {
            reason: reason.to_string(),
        });
        SlatedError::Submission(reason)
    }
}
