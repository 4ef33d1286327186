#![warn(clippy::all, missing_docs)]

//! Core domain logic for the psnow lookup tool.
//!
//! This crate hosts the domain models, the PlayStation Network presence
//! client, and the lookup algorithm used by the command-line frontend.

pub mod lookup;
pub mod models;
pub mod presence;

pub use lookup::{find_current_game, parse_account_args, parse_account_list, NOT_PLAYING};
pub use models::{AccountRef, OnlineStatus, PresenceRecord, TitleInfo};
pub use presence::{PresenceApi, PsnClient, PsnError};
