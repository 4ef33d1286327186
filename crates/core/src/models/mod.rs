//! Shared domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical account reference returned by the profile resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRef {
    /// Numeric account identifier as reported by the network.
    pub account_id: String,
    /// Public online handle, when the profile exposes one.
    pub online_id: Option<String>,
}

/// Online state reported in a presence payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnlineStatus {
    /// Signed in and reachable.
    Online,
    /// Signed out or invisible.
    Offline,
    /// Any state this tool does not model.
    #[serde(other)]
    Unknown,
}

/// A playable title, identified by platform id and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleInfo {
    /// Platform title id (e.g. `CUSA00001_00`).
    pub title_id: String,
    /// Human-readable title name.
    pub name: String,
}

/// One account's presence at the moment of the query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceRecord {
    /// Reported online state.
    pub online_status: OnlineStatus,
    /// The title currently being played, if any.
    pub current_title: Option<TitleInfo>,
    /// Platform the primary session runs on (e.g. `PS5`).
    pub platform: Option<String>,
    /// When the account was last seen online.
    pub last_online: Option<DateTime<Utc>>,
}

impl PresenceRecord {
    /// Whether the account is online right now.
    pub fn is_online(&self) -> bool {
        self.online_status == OnlineStatus::Online
    }
}
