use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Router whose config resolves the factory and the wrapped-native token
    pub router: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Bring a stuck pair's balances up to the desired totals and mint the
    /// resulting liquidity shares to `recipient`. Native funds may be
    /// attached when one side is the wrapped-native token; whatever is left
    /// after wrapping the shortfall is refunded.
    Rescue {
        token_a: String,
        token_b: String,
        desired_a: Uint128,
        desired_b: Uint128,
        recipient: String,
    },
}

// This structure describes the query messages available in the contract.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(PoolStatusResponse)]
    PoolStatus { token_a: String, token_b: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub router: Addr,
}

#[cw_serde]
pub struct PoolStatusResponse {
    /// Resolved pair contract address
    pub pair: Addr,
    /// Current pair balance of token_a
    pub balance_a: Uint128,
    /// Current pair balance of token_b
    pub balance_b: Uint128,
    /// Total liquidity shares outstanding
    pub share_supply: Uint128,
    /// True when the pair holds tokens but no share was ever minted
    pub stuck: bool,
}

#[cw_serde]
pub struct MigrateMsg {}
