//! Core types for Slated

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported social platforms
///
/// This is a closed set: platform tags read from external sources (the
/// channel registry, stored rows) are parsed through [`Platform::from_tag`]
/// and unknown tags are rejected there instead of flowing through as bare
/// strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    TikTok,
    YouTubeShorts,
    InstagramReels,
    FacebookReels,
    Twitter,
    Snapchat,
    Pinterest,
    LinkedIn,
}

impl Platform {
    /// Parse a platform from its stored tag (e.g., "tiktok")
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "tiktok" => Some(Self::TikTok),
            "youtube_shorts" => Some(Self::YouTubeShorts),
            "instagram_reels" => Some(Self::InstagramReels),
            "facebook_reels" => Some(Self::FacebookReels),
            "twitter" => Some(Self::Twitter),
            "snapchat" => Some(Self::Snapchat),
            "pinterest" => Some(Self::Pinterest),
            "linkedin" => Some(Self::LinkedIn),
            _ => None,
        }
    }

    /// The tag stored in the channel registry and in scheduled rows
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::TikTok => "tiktok",
            Self::YouTubeShorts => "youtube_shorts",
            Self::InstagramReels => "instagram_reels",
            Self::FacebookReels => "facebook_reels",
            Self::Twitter => "twitter",
            Self::Snapchat => "snapchat",
            Self::Pinterest => "pinterest",
            Self::LinkedIn => "linkedin",
        }
    }

    /// Human-readable platform name
    pub fn label(&self) -> &'static str {
        match self {
            Self::TikTok => "TikTok",
            Self::YouTubeShorts => "YouTube Shorts",
            Self::InstagramReels => "Instagram Reels",
            Self::FacebookReels => "Facebook Reels",
            Self::Twitter => "Twitter (X)",
            Self::Snapchat => "Snapchat",
            Self::Pinterest => "Pinterest",
            Self::LinkedIn => "LinkedIn",
        }
    }

    /// All platforms, in display order
    pub fn all() -> [Platform; 8] {
        [
            Self::TikTok,
            Self::YouTubeShorts,
            Self::InstagramReels,
            Self::FacebookReels,
            Self::Twitter,
            Self::Snapchat,
            Self::Pinterest,
            Self::LinkedIn,
        ]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_tag(&s.to_lowercase())
            .ok_or_else(|| format!("Unknown platform '{}'. Valid options: tiktok, youtube_shorts, instagram_reels, facebook_reels, twitter, snapchat, pinterest, linkedin", s))
    }
}

/// Content formats a post can be scheduled as
///
/// Post types are not cross-checked against platforms: any type may be
/// paired with any account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Reel,
    Story,
    FeedPost,
    YouTubeVideo,
    Carousel,
    Tweet,
}

impl PostType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "reel" => Some(Self::Reel),
            "story" => Some(Self::Story),
            "feed_post" => Some(Self::FeedPost),
            "youtube_video" => Some(Self::YouTubeVideo),
            "carousel" => Some(Self::Carousel),
            "tweet" => Some(Self::Tweet),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Reel => "reel",
            Self::Story => "story",
            Self::FeedPost => "feed_post",
            Self::YouTubeVideo => "youtube_video",
            Self::Carousel => "carousel",
            Self::Tweet => "tweet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reel => "Reel / Short",
            Self::Story => "Story",
            Self::FeedPost => "Feed Post",
            Self::YouTubeVideo => "YouTube Video",
            Self::Carousel => "Carousel",
            Self::Tweet => "Tweet / X Video",
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl FromStr for PostType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_tag(&s.to_lowercase()).ok_or_else(|| {
            format!(
                "Unknown post type '{}'. Valid options: reel, story, feed_post, youtube_video, carousel, tweet",
                s
            )
        })
    }
}

/// Why a post is being scheduled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContentIntent {
    #[default]
    Growth,
    Lead,
    Brand,
    Viral,
}

impl ContentIntent {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "growth" => Some(Self::Growth),
            "lead" => Some(Self::Lead),
            "brand" => Some(Self::Brand),
            "viral" => Some(Self::Viral),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Growth => "growth",
            Self::Lead => "lead",
            Self::Brand => "brand",
            Self::Viral => "viral",
        }
    }
}

impl fmt::Display for ContentIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl FromStr for ContentIntent {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_tag(&s.to_lowercase()).ok_or_else(|| {
            format!(
                "Unknown content intent '{}'. Valid options: growth, lead, brand, viral",
                s
            )
        })
    }
}

/// A selectable platform account from the channel registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// Account identifier, e.g. "@tiktok_main"
    pub id: String,
    /// The platform this account belongs to
    pub platform: Platform,
}

impl Account {
    pub fn new(id: impl Into<String>, platform: Platform) -> Self {
        Self {
            id: id.into(),
            platform,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.platform.label())
    }
}

/// The authenticated user a submission is attributed to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserIdentity {
    pub user_id: String,
}

impl UserIdentity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// One persisted scheduling row: a single (account, post type) pair
/// drawn from a draft at submission time
///
/// Records are immutable once created. A submission producing records for
/// A accounts and T post types creates exactly A x T of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledPostRecord {
    /// Unique record identifier (UUID v4)
    pub id: String,
    /// Authenticated user the record belongs to
    pub user_id: String,
    /// Caption text, copied verbatim from the draft
    pub caption: String,
    /// Target account identifier
    pub account_id: String,
    /// Target account's platform
    pub platform: Platform,
    /// Content format for this row
    pub post_type: PostType,
    /// Scheduled instant (Unix seconds, UTC)
    pub scheduled_at: i64,
    /// The time-of-day string the user picked, kept verbatim ("HH:MM")
    pub scheduled_time: String,
    /// Free-text notes, copied verbatim from the draft
    pub notes: String,
    /// Content intent classification
    pub intent: ContentIntent,
    /// Whether this post is part of an experiment
    pub is_experiment: bool,
    /// When the record was created (Unix seconds, UTC)
    pub created_at: i64,
}
