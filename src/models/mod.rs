//! Database models shared across the back-office repository.

#[cfg(feature = "server")]
pub mod auth;
pub mod config;
pub mod currency;
pub mod network;
pub mod wallet;
pub mod wallet_event;
