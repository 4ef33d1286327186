//! Blocking HTTP client for the PSN user-profile API.

use reqwest::blocking::Response;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::models::{AccountRef, PresenceRecord};
use crate::presence::wire::{PresenceEnvelope, ProfileEnvelope};

/// Default base URL for the mobile user-profile API.
pub const DEFAULT_BASE_URL: &str = "https://m.np.playstation.com/api";

/// Errors surfaced while talking to the presence API.
///
/// Nothing is recovered locally; every variant aborts the whole lookup.
#[derive(Debug, Error)]
pub enum PsnError {
    /// The network rejected the supplied credential.
    #[error("authentication rejected by the PlayStation Network")]
    Authentication,
    /// The identifier did not resolve to an account.
    #[error("account `{0}` could not be resolved")]
    AccountResolution(String),
    /// The API answered with an unexpected status code.
    #[error("PlayStation Network returned {status} for {endpoint}")]
    Status {
        /// HTTP status of the failed request.
        status: StatusCode,
        /// Endpoint path that failed.
        endpoint: String,
    },
    /// Connection, timeout, or payload decoding failure.
    #[error("PlayStation Network request failed")]
    Transport(#[from] reqwest::Error),
}

/// Read-only view of the presence API consumed by the lookup.
pub trait PresenceApi {
    /// Resolve an account identifier to its canonical reference.
    fn resolve_account(&self, account_id: &str) -> Result<AccountRef, PsnError>;

    /// Fetch the current presence of a resolved account.
    fn presence(&self, account: &AccountRef) -> Result<PresenceRecord, PsnError>;
}

/// Blocking client holding the session credential.
///
/// Constructed once in the entry point and passed down explicitly; there is
/// no ambient global session.
#[derive(Debug)]
pub struct PsnClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl PsnClient {
    /// Build a client from an NPSSO credential. The token is not validated
    /// locally; a bad token surfaces as an authentication error on the
    /// first call.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
        }
    }

    /// Point the client at an alternative API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn get(&self, endpoint: &str) -> Result<Response, PsnError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "requesting");
        let response = self.http.get(url).bearer_auth(&self.token).send()?;
        Ok(response)
    }
}

impl PresenceApi for PsnClient {
    fn resolve_account(&self, account_id: &str) -> Result<AccountRef, PsnError> {
        let endpoint = profile_endpoint(account_id);
        let response = self.get(&endpoint)?;
        check_status(response.status(), &endpoint, account_id)?;
        let profile: ProfileEnvelope = response.json()?;
        Ok(profile.into())
    }

    fn presence(&self, account: &AccountRef) -> Result<PresenceRecord, PsnError> {
        let endpoint = presence_endpoint(&account.account_id);
        let response = self.get(&endpoint)?;
        check_status(response.status(), &endpoint, &account.account_id)?;
        let envelope: PresenceEnvelope = response.json()?;
        Ok(envelope.into())
    }
}

fn profile_endpoint(account_id: &str) -> String {
    format!("/userProfile/v1/internal/users/{account_id}/profiles")
}

fn presence_endpoint(account_id: &str) -> String {
    format!("/userProfile/v1/internal/users/{account_id}/basicPresence?type=primary")
}

/// Map a non-success status onto the error taxonomy.
fn check_status(status: StatusCode, endpoint: &str, account_id: &str) -> Result<(), PsnError> {
    if status.is_success() {
        return Ok(());
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(PsnError::Authentication),
        StatusCode::NOT_FOUND => Err(PsnError::AccountResolution(account_id.to_string())),
        _ => Err(PsnError::Status {
            status,
            endpoint: endpoint.to_string(),
        }),
    }
}
