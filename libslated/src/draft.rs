//! The in-progress draft post edited by the form shell
//!
//! A `DraftPost` is the single mutable entity of the scheduling flow. It is
//! created empty when the form mounts, mutated only through the methods
//! here in response to user input, and reset to its empty initial state
//! after a successful submission. No other component mutates it.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::media::MediaRef;
use crate::schedule::ScheduleSpec;
use crate::types::{Account, ContentIntent, PostType};

/// Time-of-day a fresh draft starts with
pub const DEFAULT_TIME_OF_DAY: &str = "12:00";

/// The mutable, in-progress post being edited
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftPost {
    /// Attached content file, required before submission
    pub media: Option<MediaRef>,
    /// Caption and hashtags
    pub caption: String,
    /// Selected target accounts, in selection order
    pub accounts: Vec<Account>,
    /// Selected post types, in selection order
    pub post_types: Vec<PostType>,
    /// Scheduled calendar date
    pub date: NaiveDate,
    /// Scheduled time of day ("HH:MM", 24-hour)
    pub time: String,
    /// Free-text notes for the creator's own records
    pub notes: String,
    /// Content intent classification
    pub intent: ContentIntent,
    /// Whether this post is part of an experiment
    pub experiment: bool,
}

impl DraftPost {
    /// The empty initial state: no media, nothing selected, today at
    /// 12:00, growth intent, not an experiment
    pub fn new() -> Self {
        Self {
            media: None,
            caption: String::new(),
            accounts: Vec::new(),
            post_types: Vec::new(),
            date: Local::now().date_naive(),
            time: DEFAULT_TIME_OF_DAY.to_string(),
            notes: String::new(),
            intent: ContentIntent::default(),
            experiment: false,
        }
    }

    pub fn set_media(&mut self, media: MediaRef) {
        self.media = Some(media);
    }

    pub fn clear_media(&mut self) {
        self.media = None;
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    /// Toggle an account selection: selected accounts are removed,
    /// unselected ones are appended, preserving selection order
    pub fn toggle_account(&mut self, account: Account) {
        match self.accounts.iter().position(|a| *a == account) {
            Some(pos) => {
                self.accounts.remove(pos);
            }
            None => self.accounts.push(account),
        }
    }

    /// Toggle a post-type selection, same semantics as [`toggle_account`]
    ///
    /// [`toggle_account`]: DraftPost::toggle_account
    pub fn toggle_post_type(&mut self, post_type: PostType) {
        match self.post_types.iter().position(|t| *t == post_type) {
            Some(pos) => {
                self.post_types.remove(pos);
            }
            None => self.post_types.push(post_type),
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn set_intent(&mut self, intent: ContentIntent) {
        self.intent = intent;
    }

    pub fn set_experiment(&mut self, experiment: bool) {
        self.experiment = experiment;
    }

    /// The draft's schedule as a combinable spec
    pub fn schedule(&self) -> ScheduleSpec {
        ScheduleSpec::new(self.date, self.time.clone())
    }

    /// Restore the empty initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for DraftPost {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Platform;

    #[test]
    fn test_new_draft_is_empty() {
        let draft = DraftPost::new();

        assert!(draft.media.is_none());
        assert!(draft.caption.is_empty());
        assert!(draft.accounts.is_empty());
        assert!(draft.post_types.is_empty());
        assert_eq!(draft.date, Local::now().date_naive());
        assert_eq!(draft.time, "12:00");
        assert!(draft.notes.is_empty());
        assert_eq!(draft.intent, ContentIntent::Growth);
        assert!(!draft.experiment);
    }

    #[test]
    fn test_toggle_account_adds_then_removes() {
        let mut draft = DraftPost::new();
        let account = Account::new("@tiktok_main", Platform::TikTok);

        draft.toggle_account(account.clone());
        assert_eq!(draft.accounts, vec![account.clone()]);

        draft.toggle_account(account);
        assert!(draft.accounts.is_empty());
    }

    #[test]
    fn test_toggle_account_preserves_selection_order() {
        let mut draft = DraftPost::new();
        let a = Account::new("@tiktok_main", Platform::TikTok);
        let b = Account::new("@ig_main", Platform::InstagramReels);
        let c = Account::new("@yt_ai", Platform::YouTubeShorts);

        draft.toggle_account(a.clone());
        draft.toggle_account(b.clone());
        draft.toggle_account(c.clone());
        draft.toggle_account(b.clone()); // deselect the middle one

        assert_eq!(draft.accounts, vec![a, c]);
    }

    #[test]
    fn test_toggle_post_type() {
        let mut draft = DraftPost::new();

        draft.toggle_post_type(PostType::Reel);
        draft.toggle_post_type(PostType::Story);
        assert_eq!(draft.post_types, vec![PostType::Reel, PostType::Story]);

        draft.toggle_post_type(PostType::Reel);
        assert_eq!(draft.post_types, vec![PostType::Story]);
    }

    #[test]
    fn test_schedule_spec_reflects_draft() {
        let mut draft = DraftPost::new();
        draft.set_date(NaiveDate::from_ymd_opt(2026, 9, 14).unwrap());
        draft.set_time("08:15");

        let spec = draft.schedule();
        assert_eq!(spec.date, NaiveDate::from_ymd_opt(2026, 9, 14).unwrap());
        assert_eq!(spec.time, "08:15");
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut draft = DraftPost::new();
        draft.set_caption("Big announcement #launch");
        draft.toggle_account(Account::new("@x_main", Platform::Twitter));
        draft.toggle_post_type(PostType::Tweet);
        draft.set_time("18:30");
        draft.set_notes("pin this one");
        draft.set_intent(ContentIntent::Viral);
        draft.set_experiment(true);

        draft.reset();

        assert_eq!(draft, DraftPost::new());
    }
}
