//! Diesel models for payment networks and network types.

use diesel::prelude::*;

use crate::domain::network::{
    Network as DomainNetwork, NetworkType as DomainNetworkType, NewNetwork as DomainNewNetwork,
    NewNetworkType as DomainNewNetworkType,
};
use crate::domain::types::{
    HubId, NetworkCode, NetworkId, NetworkName, NetworkTypeId, NetworkTypeName,
    TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::networks)]
pub struct Network {
    pub id: i32,
    pub hub_id: i32,
    pub code: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::networks)]
pub struct NewNetwork<'a> {
    pub hub_id: i32,
    pub code: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Network, foreign_key = network_id))]
#[diesel(table_name = crate::schema::network_types)]
pub struct NetworkType {
    pub id: i32,
    pub network_id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::network_types)]
pub struct NewNetworkType<'a> {
    pub network_id: i32,
    pub name: &'a str,
}

impl TryFrom<Network> for DomainNetwork {
    type Error = TypeConstraintError;

    fn try_from(network: Network) -> Result<Self, Self::Error> {
        Ok(Self {
            id: NetworkId::new(network.id)?,
            hub_id: HubId::new(network.hub_id)?,
            code: NetworkCode::new(network.code)?,
            name: NetworkName::new(network.name)?,
        })
    }
}

impl TryFrom<NetworkType> for DomainNetworkType {
    type Error = TypeConstraintError;

    fn try_from(network_type: NetworkType) -> Result<Self, Self::Error> {
        Ok(Self {
            id: NetworkTypeId::new(network_type.id)?,
            network_id: NetworkId::new(network_type.network_id)?,
            name: NetworkTypeName::new(network_type.name)?,
        })
    }
}

impl<'a> From<&'a DomainNewNetwork> for NewNetwork<'a> {
    fn from(network: &'a DomainNewNetwork) -> Self {
        Self {
            hub_id: network.hub_id.get(),
            code: network.code.as_str(),
            name: network.name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainNewNetworkType> for NewNetworkType<'a> {
    fn from(network_type: &'a DomainNewNetworkType) -> Self {
        Self {
            network_id: network_type.network_id.get(),
            name: network_type.name.as_str(),
        }
    }
}
