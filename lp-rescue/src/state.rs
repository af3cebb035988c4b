use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

/// Immutable contract configuration, written once at instantiation.
#[cw_serde]
pub struct Config {
    /// Router that resolves the pair factory and the wrapped-native identity
    pub router: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");
