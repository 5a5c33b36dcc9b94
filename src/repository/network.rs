use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::network::{Network, NetworkType, NewNetwork, NewNetworkType};
use crate::domain::types::{HubId, NetworkId};
use crate::models::network::{
    Network as DbNetwork, NetworkType as DbNetworkType, NewNetwork as DbNewNetwork,
    NewNetworkType as DbNewNetworkType,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CatalogListQuery, DieselRepository, NetworkReader, NetworkWriter, page_bounds,
};

impl NetworkReader for DieselRepository {
    fn get_network_by_id(&self, id: NetworkId, hub_id: HubId) -> RepositoryResult<Option<Network>> {
        use crate::schema::networks;

        let mut conn = self.conn()?;
        let network = networks::table
            .filter(networks::id.eq(id.get()))
            .filter(networks::hub_id.eq(hub_id.get()))
            .first::<DbNetwork>(&mut conn)
            .optional()?;

        Ok(network.map(Network::try_from).transpose()?)
    }

    fn list_networks(&self, query: CatalogListQuery) -> RepositoryResult<(usize, Vec<Network>)> {
        use crate::schema::networks;

        let mut conn = self.conn()?;

        let total = networks::table
            .filter(networks::hub_id.eq(query.hub_id.get()))
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = networks::table
            .filter(networks::hub_id.eq(query.hub_id.get()))
            .order(networks::code.asc())
            .into_boxed::<Sqlite>();
        if let Some((offset, limit)) = page_bounds(&query.pagination) {
            items = items.offset(offset).limit(limit);
        }

        let networks = items
            .load::<DbNetwork>(&mut conn)?
            .into_iter()
            .map(Network::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, networks))
    }

    fn list_network_types(&self, network_id: NetworkId) -> RepositoryResult<Vec<NetworkType>> {
        use crate::schema::network_types;

        let mut conn = self.conn()?;
        let types = network_types::table
            .filter(network_types::network_id.eq(network_id.get()))
            .order(network_types::name.asc())
            .load::<DbNetworkType>(&mut conn)?
            .into_iter()
            .map(NetworkType::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(types)
    }
}

impl NetworkWriter for DieselRepository {
    fn create_network(&self, new_network: &NewNetwork) -> RepositoryResult<Network> {
        use crate::schema::networks;

        let mut conn = self.conn()?;
        let insertable: DbNewNetwork = new_network.into();

        let created = diesel::insert_into(networks::table)
            .values(&insertable)
            .get_result::<DbNetwork>(&mut conn)?;

        Ok(Network::try_from(created)?)
    }

    fn create_network_type(&self, new_type: &NewNetworkType) -> RepositoryResult<NetworkType> {
        use crate::schema::network_types;

        let mut conn = self.conn()?;
        let insertable: DbNewNetworkType = new_type.into();

        let created = diesel::insert_into(network_types::table)
            .values(&insertable)
            .get_result::<DbNetworkType>(&mut conn)?;

        Ok(NetworkType::try_from(created)?)
    }
}
