use crate::asset::{query_token_balance, transfer_from_msg, transfer_msg};
use crate::error::ContractError;
use crate::state::CONFIG;
use amm_interfaces::{
    FactoryQueryMsg, PairExecuteMsg, PairResponse, RouterConfigResponse, RouterQueryMsg,
    WrappedNativeExecuteMsg,
};
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, DepsMut, Env, MessageInfo, QuerierWrapper,
    Response, Uint128, WasmMsg,
};
use cw_utils::may_pay;

// Rescue a pair stuck with unbalanced deposits and zero share supply: pull
// exactly the shortfall of each token into the pair, refund unused native
// funds and call the pair's low-level mint. The router's add-liquidity path
// would reject such a pair, so the mint entry point is invoked directly.
//
// The whole sequence is a single transaction: if any transfer, the refund or
// the mint fails, every message rolls back and the caller keeps their funds.
pub fn execute_rescue(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_a: String,
    token_b: String,
    desired_a: Uint128,
    desired_b: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    let token_a = deps.api.addr_validate(&token_a)?;
    let token_b = deps.api.addr_validate(&token_b)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    if token_a == token_b {
        return Err(ContractError::DoublingAssets {});
    }

    let config = CONFIG.load(deps.storage)?;
    let router: RouterConfigResponse = deps
        .querier
        .query_wasm_smart(config.router, &RouterQueryMsg::Config {})?;

    // An unknown pair surfaces the factory's error verbatim
    let pair: PairResponse = deps.querier.query_wasm_smart(
        router.factory,
        &FactoryQueryMsg::Pair {
            token_a: token_a.to_string(),
            token_b: token_b.to_string(),
        },
    )?;
    let pair = pair.contract_addr;

    // Fresh balance reads; the mint later credits exactly the excess over the
    // pair's recorded reserves, which is exactly what gets transferred below
    let needed_a = required_shortfall(&deps.querier, &token_a, &pair, desired_a)?;
    let needed_b = required_shortfall(&deps.querier, &token_b, &pair, desired_b)?;

    let mut attached = may_pay(&info, &router.native_denom)?;
    let mut messages: Vec<CosmosMsg> = vec![];

    // Settle each side in caller-supplied order
    for (token, needed) in [(&token_a, needed_a), (&token_b, needed_b)] {
        if *token == router.wrapped_native && !attached.is_zero() {
            if attached < needed {
                return Err(ContractError::InvalidNativeAmount {
                    expected: needed,
                    actual: attached,
                });
            }
            // Wrap the shortfall into this contract's balance, then forward
            // the wrapped units to the pair
            messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: token.to_string(),
                msg: to_json_binary(&WrappedNativeExecuteMsg::Deposit {})?,
                funds: vec![Coin {
                    denom: router.native_denom.clone(),
                    amount: needed,
                }],
            }));
            messages.push(transfer_msg(token, &pair, needed)?);
            attached = attached.checked_sub(needed)?;
        } else {
            messages.push(transfer_from_msg(token, &info.sender, &pair, needed)?);
        }
    }

    // Return whatever native funds the shortfall did not consume. A failing
    // refund fails the whole call; the contract never retains funds.
    let refund_amount = attached;
    if !refund_amount.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin {
                denom: router.native_denom,
                amount: refund_amount,
            }],
        }));
    }

    // Mint last, after every pull and the refund, so a reentrant call only
    // ever observes a fully-transferred-in pair
    messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: pair.to_string(),
        msg: to_json_binary(&PairExecuteMsg::Mint {
            recipient: recipient.to_string(),
        })?,
        funds: vec![],
    }));

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "rescue_liquidity")
        .add_attribute("token_a", token_a)
        .add_attribute("token_b", token_b)
        .add_attribute("pair", pair)
        .add_attribute("amount_a_in", needed_a)
        .add_attribute("amount_b_in", needed_b)
        .add_attribute("refund_amount", refund_amount)
        .add_attribute("recipient", recipient))
}

// A pair already holding the desired amount yields no shortfall to
// contribute; the mint would issue zero shares, so equality is rejected up
// front with an actionable error instead of a useless success.
fn required_shortfall(
    querier: &QuerierWrapper,
    token: &Addr,
    pair: &Addr,
    desired: Uint128,
) -> Result<Uint128, ContractError> {
    let stuck = query_token_balance(querier, token, pair)?;
    if desired <= stuck {
        return Err(ContractError::InsufficientDesiredAmount {
            token: token.clone(),
            desired,
            stuck,
        });
    }

    Ok(desired - stuck)
}
