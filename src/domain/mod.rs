//! Domain aggregates exposed by the back-office service layer.

pub mod changes;
pub mod currency;
pub mod network;
pub mod types;
pub mod wallet;
pub mod wallet_event;
