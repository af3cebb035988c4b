use crate::asset::{query_token_balance, query_token_supply};
use crate::msg::{ConfigResponse, PoolStatusResponse};
use crate::state::CONFIG;
use amm_interfaces::{FactoryQueryMsg, PairResponse, RouterConfigResponse, RouterQueryMsg};
use cosmwasm_std::{Deps, StdResult};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;

    Ok(ConfigResponse {
        router: config.router,
    })
}

/// Packages the balance and share-supply reads a caller would otherwise do by
/// hand to tell whether a pair is stuck. Read-only, no discovery.
pub fn query_pool_status(
    deps: Deps,
    token_a: String,
    token_b: String,
) -> StdResult<PoolStatusResponse> {
    let token_a = deps.api.addr_validate(&token_a)?;
    let token_b = deps.api.addr_validate(&token_b)?;

    let config = CONFIG.load(deps.storage)?;
    let router: RouterConfigResponse = deps
        .querier
        .query_wasm_smart(config.router, &RouterQueryMsg::Config {})?;

    let pair: PairResponse = deps.querier.query_wasm_smart(
        router.factory,
        &FactoryQueryMsg::Pair {
            token_a: token_a.to_string(),
            token_b: token_b.to_string(),
        },
    )?;
    let pair = pair.contract_addr;

    let balance_a = query_token_balance(&deps.querier, &token_a, &pair)?;
    let balance_b = query_token_balance(&deps.querier, &token_b, &pair)?;
    let share_supply = query_token_supply(&deps.querier, &pair)?;

    let stuck = share_supply.is_zero() && !(balance_a.is_zero() && balance_b.is_zero());

    Ok(PoolStatusResponse {
        pair,
        balance_a,
        balance_b,
        share_supply,
        stuck,
    })
}
