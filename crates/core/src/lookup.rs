//! Account-list parsing and the current-game lookup.

use tracing::{debug, info};

use crate::models::TitleInfo;
use crate::presence::{PresenceApi, PsnError};

/// Reserved output meaning "no qualifying result". Never a real title name.
pub const NOT_PLAYING: &str = "Not playing";

/// Parse one delimited account-list argument.
///
/// Identifiers are separated by `,`. The characters `[`, `]`, `"` and
/// surrounding whitespace are stripped as decoration, so `["a","b"]`,
/// `"a","b"` and `a,b` all parse to `[a, b]`. Empty segments are discarded.
pub fn parse_account_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|segment| {
            segment.trim_matches(|c: char| matches!(c, '[' | ']' | '"') || c.is_whitespace())
        })
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse and merge several positional account-list arguments, in order.
pub fn parse_account_args<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| parse_account_list(arg.as_ref()))
        .collect()
}

/// Find the game the first qualifying account is currently playing.
///
/// Identifiers are checked in order; the first account that is online and
/// has a current title wins and the scan stops there. An online account
/// with no current title does not qualify and the scan continues. Returns
/// `None` when no identifier qualifies.
///
/// Any API failure aborts the whole lookup; there is no per-identifier
/// isolation and no retry.
pub fn find_current_game(
    api: &impl PresenceApi,
    account_ids: &[String],
) -> Result<Option<TitleInfo>, PsnError> {
    for account_id in account_ids {
        let account = api.resolve_account(account_id)?;
        let record = api.presence(&account)?;
        debug!(
            account_id = %account_id,
            online = record.is_online(),
            "presence fetched"
        );

        if !record.is_online() {
            continue;
        }

        if let Some(title) = record.current_title {
            info!(account_id = %account_id, title = %title.name, "qualifying match");
            return Ok(Some(title));
        }
    }

    Ok(None)
}
