//! DTOs exposed by the currency and network endpoints.

use serde::Serialize;

use crate::domain::network::{Network, NetworkType};

/// Network together with its types.
#[derive(Debug, Serialize)]
pub struct NetworkWithTypes {
    #[serde(flatten)]
    pub network: Network,
    pub types: Vec<NetworkType>,
}
