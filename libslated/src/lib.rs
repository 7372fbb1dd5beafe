//! Slated - scheduling core for multi-platform creator posting
//!
//! This library turns one edited draft into the set of per-account,
//! per-post-type scheduling rows a downstream publisher consumes, with
//! validation and atomic batch persistence at the submission boundary.

pub mod config;
pub mod db;
pub mod draft;
pub mod error;
pub mod expand;
pub mod identity;
pub mod logging;
pub mod media;
pub mod registry;
pub mod schedule;
pub mod service;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use db::Database;
pub use draft::DraftPost;
pub use error::{RejectReason, Result, SlatedError};
pub use expand::expand;
pub use media::{MediaKind, MediaRef};
pub use schedule::ScheduleSpec;
pub use types::{
    Account, ContentIntent, Platform, PostType, ScheduledPostRecord, UserIdentity,
};
