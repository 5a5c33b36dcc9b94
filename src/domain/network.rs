//! Payment networks (blockchains, card schemes, bank rails) and their types.

use serde::{Deserialize, Serialize};

use crate::domain::types::{
    HubId, NetworkCode, NetworkId, NetworkName, NetworkTypeId, NetworkTypeName,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub id: NetworkId,
    pub hub_id: HubId,
    pub code: NetworkCode,
    pub name: NetworkName,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewNetwork {
    pub hub_id: HubId,
    pub code: NetworkCode,
    pub name: NetworkName,
}

/// A sub-kind of a network, e.g. `token` or `native` on a chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkType {
    pub id: NetworkTypeId,
    pub network_id: NetworkId,
    pub name: NetworkTypeName,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewNetworkType {
    pub network_id: NetworkId,
    pub name: NetworkTypeName,
}
