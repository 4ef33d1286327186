//! Deserialization types mirroring the PSN user-profile API payloads.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::{AccountRef, OnlineStatus, PresenceRecord, TitleInfo};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileEnvelope {
    pub account_id: String,
    #[serde(default)]
    pub online_id: Option<String>,
}

impl From<ProfileEnvelope> for AccountRef {
    fn from(raw: ProfileEnvelope) -> Self {
        AccountRef {
            account_id: raw.account_id,
            online_id: raw.online_id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PresenceEnvelope {
    pub basic_presence: BasicPresence,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BasicPresence {
    #[serde(default)]
    pub primary_platform_info: Option<PrimaryPlatformInfo>,
    #[serde(default)]
    pub game_title_info_list: Vec<GameTitleInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PrimaryPlatformInfo {
    pub online_status: OnlineStatus,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub last_online_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GameTitleInfo {
    pub np_title_id: String,
    pub title_name: String,
}

impl From<PresenceEnvelope> for PresenceRecord {
    fn from(raw: PresenceEnvelope) -> Self {
        let basic = raw.basic_presence;
        let (online_status, platform, last_online) = match basic.primary_platform_info {
            Some(info) => (info.online_status, info.platform, info.last_online_date),
            None => (OnlineStatus::Unknown, None, None),
        };

        // The title list may legitimately be empty for an online account
        // (e.g. sitting on the home screen), so "playing" is optional.
        let current_title = basic
            .game_title_info_list
            .into_iter()
            .next()
            .map(|title| TitleInfo {
                title_id: title.np_title_id,
                name: title.title_name,
            });

        PresenceRecord {
            online_status,
            current_title,
            platform,
            last_online,
        }
    }
}
