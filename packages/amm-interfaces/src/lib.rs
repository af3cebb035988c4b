use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

/// Queries answered by the router contract. The router is the single piece of
/// configuration lp-rescue holds; everything else is resolved through it.
#[cw_serde]
#[derive(QueryResponses)]
pub enum RouterQueryMsg {
    #[returns(RouterConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct RouterConfigResponse {
    /// Factory holding the pair registry
    pub factory: Addr,
    /// The cw20 token wrapping the chain's native currency 1:1
    pub wrapped_native: Addr,
    /// Denom accepted by the wrapped-native token's Deposit
    pub native_denom: String,
}

/// Queries answered by the pair factory.
#[cw_serde]
#[derive(QueryResponses)]
pub enum FactoryQueryMsg {
    /// Resolve the pair contract for an unordered token pair.
    /// Unknown pairs are a query error, never a default address.
    #[returns(PairResponse)]
    Pair { token_a: String, token_b: String },
}

#[cw_serde]
pub struct PairResponse {
    pub contract_addr: Addr,
}

/// Messages a caller can send to a pair contract. The pair is its own
/// liquidity-share ledger and answers the standard cw20 queries for it.
#[cw_serde]
pub enum PairExecuteMsg {
    /// Credit `recipient` with shares computed from the excess of the pair's
    /// current token balances over its last-recorded reserves.
    Mint { recipient: String },
    /// Set the recorded reserves to the current token balances.
    Sync {},
}

/// Messages accepted by the wrapped-native token on top of the cw20 surface.
#[cw_serde]
pub enum WrappedNativeExecuteMsg {
    /// Credit the sender with wrapped units 1:1 for the attached native funds.
    Deposit {},
    /// Burn wrapped units and return native funds to the sender.
    Withdraw { amount: Uint128 },
}
