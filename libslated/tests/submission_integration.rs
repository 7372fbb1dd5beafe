//! End-to-end submission tests against a real SQLite database
//!
//! Exercises the full path: registry lookup, draft editing, gateway
//! validation, expansion, and atomic batch persistence.

use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;

use libslated::db::Database;
use libslated::identity::MemoryIdentity;
use libslated::registry::AccountRegistry;
use libslated::service::{EventBus, SubmissionGateway};
use libslated::store::ScheduleStore;
use libslated::{
    Account, ContentIntent, DraftPost, MediaKind, MediaRef, Platform, PostType, RejectReason,
    SlatedError,
};

async fn setup_db() -> (Arc<Database>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("slated.db");
    let db = Database::new(db_path.to_str().unwrap()).await.unwrap();
    (Arc::new(db), temp_dir)
}

fn gateway(db: &Arc<Database>, identity: MemoryIdentity) -> SubmissionGateway {
    let store: Arc<dyn ScheduleStore> = db.clone();
    SubmissionGateway::new(store, Arc::new(identity), EventBus::new(100))
}

fn sample_media() -> MediaRef {
    MediaRef {
        path: "/content/launch.mp4".to_string(),
        kind: MediaKind::Video,
        file_size: 2048,
        file_hash: "cafebabe".to_string(),
        thumbnail: Some("/content/launch_thumb.jpg".to_string()),
    }
}

async fn seed_channels(db: &Database) {
    db.add_channel(&Account::new("@acct1", Platform::TikTok), true)
        .await
        .unwrap();
    db.add_channel(&Account::new("@acct2", Platform::InstagramReels), true)
        .await
        .unwrap();
    db.add_channel(&Account::new("@dormant", Platform::Twitter), false)
        .await
        .unwrap();
}

#[tokio::test]
async fn submit_persists_one_row_per_account_type_pair() {
    let (db, _temp_dir) = setup_db().await;
    seed_channels(&db).await;

    let gateway = gateway(&db, MemoryIdentity::signed_in("creator-1"));

    // Select every active registry account, like the form does
    let mut draft = DraftPost::new();
    draft.set_media(sample_media());
    draft.set_caption("Launch week! #drop");
    for account in db.active_accounts().await.unwrap() {
        draft.toggle_account(account);
    }
    draft.toggle_post_type(PostType::Reel);
    draft.toggle_post_type(PostType::Story);
    draft.set_date(NaiveDate::from_ymd_opt(2026, 9, 14).unwrap());
    draft.set_time("18:30");
    draft.set_notes("pin the reel");
    draft.set_intent(ContentIntent::Viral);
    draft.set_experiment(true);

    let confirmation = gateway.submit(&mut draft).await.unwrap();
    assert_eq!(confirmation.records, 4);
    assert_eq!(confirmation.accounts, 2);

    let rows = db.list_scheduled(10).await.unwrap();
    assert_eq!(rows.len(), 4);

    let pairs: Vec<(String, PostType)> = rows
        .iter()
        .map(|r| (r.account_id.clone(), r.post_type))
        .collect();
    assert!(pairs.contains(&("@acct1".to_string(), PostType::Reel)));
    assert!(pairs.contains(&("@acct1".to_string(), PostType::Story)));
    assert!(pairs.contains(&("@acct2".to_string(), PostType::Reel)));
    assert!(pairs.contains(&("@acct2".to_string(), PostType::Story)));

    for row in &rows {
        assert_eq!(row.user_id, "creator-1");
        assert_eq!(row.caption, "Launch week! #drop");
        assert_eq!(row.scheduled_time, "18:30");
        assert_eq!(row.notes, "pin the reel");
        assert_eq!(row.intent, ContentIntent::Viral);
        assert!(row.is_experiment);
    }

    // The dormant account was never selectable
    assert!(!rows.iter().any(|r| r.account_id == "@dormant"));
}

#[tokio::test]
async fn submit_resets_draft_after_success() {
    let (db, _temp_dir) = setup_db().await;
    seed_channels(&db).await;

    let gateway = gateway(&db, MemoryIdentity::signed_in("creator-1"));

    let mut draft = DraftPost::new();
    draft.set_media(sample_media());
    draft.toggle_account(Account::new("@acct1", Platform::TikTok));
    draft.toggle_post_type(PostType::Reel);

    gateway.submit(&mut draft).await.unwrap();

    assert_eq!(draft, DraftPost::new());
}

#[tokio::test]
async fn rejected_submission_writes_nothing() {
    let (db, _temp_dir) = setup_db().await;

    let gateway = gateway(&db, MemoryIdentity::signed_in("creator-1"));

    // Media present but no selections: rejected at the accounts check
    let mut draft = DraftPost::new();
    draft.set_media(sample_media());
    draft.set_caption("never persisted");

    let result = gateway.submit(&mut draft).await;

    assert!(matches!(
        result,
        Err(SlatedError::Submission(RejectReason::NoAccounts))
    ));
    assert_eq!(db.count_scheduled().await.unwrap(), 0);
    assert_eq!(draft.caption, "never persisted");
}

#[tokio::test]
async fn signed_out_submission_writes_nothing() {
    let (db, _temp_dir) = setup_db().await;

    let gateway = gateway(&db, MemoryIdentity::signed_out());

    let mut draft = DraftPost::new();
    draft.set_media(sample_media());
    draft.toggle_account(Account::new("@acct1", Platform::TikTok));
    draft.toggle_post_type(PostType::Reel);

    let result = gateway.submit(&mut draft).await;

    assert!(matches!(result, Err(SlatedError::Auth(_))));
    assert_eq!(db.count_scheduled().await.unwrap(), 0);
}

#[tokio::test]
async fn consecutive_submissions_accumulate_rows() {
    let (db, _temp_dir) = setup_db().await;

    let gateway = gateway(&db, MemoryIdentity::signed_in("creator-1"));

    for n in 0..3 {
        let mut draft = DraftPost::new();
        draft.set_media(sample_media());
        draft.set_caption(format!("post {}", n));
        draft.toggle_account(Account::new("@acct1", Platform::TikTok));
        draft.toggle_post_type(PostType::Reel);

        gateway.submit(&mut draft).await.unwrap();
    }

    assert_eq!(db.count_scheduled().await.unwrap(), 3);
}

#[tokio::test]
async fn trait_object_store_lists_scheduled_rows() {
    let (db, _temp_dir) = setup_db().await;

    let gateway = gateway(&db, MemoryIdentity::signed_in("creator-1"));

    let mut draft = DraftPost::new();
    draft.set_media(sample_media());
    draft.toggle_account(Account::new("@acct1", Platform::TikTok));
    draft.toggle_post_type(PostType::Reel);
    gateway.submit(&mut draft).await.unwrap();

    let store: Arc<dyn ScheduleStore> = db;
    let rows = store.list_scheduled(5).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].platform, Platform::TikTok);
}
