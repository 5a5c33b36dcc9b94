//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// HMAC secret used to verify bearer tokens.
    pub secret: String,
    /// Origin of the admin dashboard; any origin is accepted when unset.
    #[serde(default)]
    pub allowed_origin: Option<String>,
}
