//! Presence client and wire payloads.

pub mod client;
mod wire;

pub use client::{PresenceApi, PsnClient, PsnError};
