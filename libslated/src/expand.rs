//! Post expansion: draft selections to persistable scheduling rows
//!
//! Each (account, post type) pair becomes its own row because each pair may
//! later succeed or fail independently at the publishing platform. The
//! expansion itself is a pure transform: the caller supplies the resolved
//! schedule instant and creation timestamp, so the same inputs always
//! produce the same rows (modulo fresh row ids).

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::draft::DraftPost;
use crate::types::{ScheduledPostRecord, UserIdentity};

/// Expand a draft into one record per selected (account, post type) pair
///
/// Iteration is accounts outer, post types inner, both in selection order,
/// so the output length is exactly `accounts.len() * post_types.len()`.
/// Shared draft fields (caption, notes, intent, experiment flag, schedule)
/// are copied verbatim into every record. If either selection is empty the
/// result is empty; callers reject empty selections before persisting.
pub fn expand(
    draft: &DraftPost,
    user: &UserIdentity,
    scheduled_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Vec<ScheduledPostRecord> {
    let mut records = Vec::with_capacity(draft.accounts.len() * draft.post_types.len());

    for account in &draft.accounts {
        for post_type in &draft.post_types {
            records.push(ScheduledPostRecord {
                id: Uuid::new_v4().to_string(),
                user_id: user.user_id.clone(),
                caption: draft.caption.clone(),
                account_id: account.id.clone(),
                platform: account.platform,
                post_type: *post_type,
                scheduled_at: scheduled_at.timestamp(),
                scheduled_time: draft.time.clone(),
                notes: draft.notes.clone(),
                intent: draft.intent,
                is_experiment: draft.experiment,
                created_at: now.timestamp(),
            });
        }
    }

    records
}
