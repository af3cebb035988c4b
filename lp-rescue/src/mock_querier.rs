#![cfg(not(target_arch = "wasm32"))]
use amm_interfaces::{FactoryQueryMsg, PairResponse, RouterConfigResponse, RouterQueryMsg};
use cosmwasm_std::testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{
    from_json, to_json_binary, Addr, Coin, ContractResult, Empty, OwnedDeps, Querier,
    QuerierResult, QueryRequest, SystemError, SystemResult, Uint128, WasmQuery,
};
use cw20::{BalanceResponse, Cw20QueryMsg, TokenInfoResponse};
use std::collections::HashMap;

// mock_dependencies is a drop-in replacement for cosmwasm_std::testing::mock_dependencies
// that understands the router, the factory and cw20 token balances.
pub fn mock_dependencies(
    contract_balance: &[Coin],
) -> OwnedDeps<MockStorage, MockApi, WasmMockQuerier> {
    let custom_querier: WasmMockQuerier =
        WasmMockQuerier::new(MockQuerier::new(&[(MOCK_CONTRACT_ADDR, contract_balance)]));

    OwnedDeps {
        storage: MockStorage::default(),
        api: MockApi::default(),
        querier: custom_querier,
        custom_query_type: Default::default(),
    }
}

pub struct WasmMockQuerier {
    base: MockQuerier<Empty>,
    token_querier: TokenQuerier,
    amm_querier: AmmQuerier,
}

#[derive(Clone, Default)]
pub struct TokenQuerier {
    // This lets us iterate over all pairs that match the first string
    balances: HashMap<String, HashMap<String, Uint128>>,
}

impl TokenQuerier {
    pub fn new(balances: &[(&String, &[(&String, &Uint128)])]) -> Self {
        TokenQuerier {
            balances: balances_to_map(balances),
        }
    }
}

pub(crate) fn balances_to_map(
    balances: &[(&String, &[(&String, &Uint128)])],
) -> HashMap<String, HashMap<String, Uint128>> {
    let mut balances_map: HashMap<String, HashMap<String, Uint128>> = HashMap::new();
    for (contract_addr, balances) in balances.iter() {
        let mut contract_balances_map: HashMap<String, Uint128> = HashMap::new();
        for (addr, balance) in balances.iter() {
            contract_balances_map.insert(addr.to_string(), **balance);
        }

        balances_map.insert(contract_addr.to_string(), contract_balances_map);
    }
    balances_map
}

// The stand-in for the router and factory collaborators
#[derive(Clone, Default)]
pub struct AmmQuerier {
    router: String,
    factory: String,
    wrapped_native: String,
    native_denom: String,
    // pair registry keyed by the unordered token pair
    pairs: HashMap<String, String>,
}

fn pair_key(token_a: &str, token_b: &str) -> String {
    if token_a < token_b {
        format!("{}:{}", token_a, token_b)
    } else {
        format!("{}:{}", token_b, token_a)
    }
}

impl Querier for WasmMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_json(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {}", e),
                    request: bin_request.into(),
                })
            }
        };
        self.handle_query(&request)
    }
}

impl WasmMockQuerier {
    pub fn new(base: MockQuerier<Empty>) -> Self {
        WasmMockQuerier {
            base,
            token_querier: TokenQuerier::default(),
            amm_querier: AmmQuerier::default(),
        }
    }

    // Seed cw20 balances for `contract_addr`
    pub fn with_token_balances(&mut self, balances: &[(&String, &[(&String, &Uint128)])]) {
        self.token_querier = TokenQuerier::new(balances);
    }

    // Seed native bank balances
    pub fn with_balance(&mut self, balances: &[(&String, &[Coin])]) {
        for (addr, coins) in balances {
            self.base.bank.update_balance(addr.to_string(), coins.to_vec());
        }
    }

    pub fn with_amm(
        &mut self,
        router: &Addr,
        factory: &Addr,
        wrapped_native: &Addr,
        native_denom: &str,
    ) {
        self.amm_querier.router = router.to_string();
        self.amm_querier.factory = factory.to_string();
        self.amm_querier.wrapped_native = wrapped_native.to_string();
        self.amm_querier.native_denom = native_denom.to_string();
    }

    pub fn with_pair(&mut self, token_a: &Addr, token_b: &Addr, pair: &Addr) {
        self.amm_querier.pairs.insert(
            pair_key(token_a.as_str(), token_b.as_str()),
            pair.to_string(),
        );
    }

    fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg }) => {
                // 1) router config
                if *contract_addr == self.amm_querier.router {
                    if let Ok(RouterQueryMsg::Config {}) = from_json(msg) {
                        let resp = RouterConfigResponse {
                            factory: Addr::unchecked(&self.amm_querier.factory),
                            wrapped_native: Addr::unchecked(&self.amm_querier.wrapped_native),
                            native_denom: self.amm_querier.native_denom.clone(),
                        };
                        let bin = to_json_binary(&resp).unwrap();
                        return SystemResult::Ok(ContractResult::Ok(bin));
                    }
                    panic!(
                        "Unexpected query to router: {}",
                        String::from_utf8_lossy(msg)
                    );
                }

                // 2) factory pair registry
                if *contract_addr == self.amm_querier.factory {
                    if let Ok(FactoryQueryMsg::Pair { token_a, token_b }) = from_json(msg) {
                        return match self.amm_querier.pairs.get(&pair_key(&token_a, &token_b)) {
                            Some(pair) => {
                                let resp = PairResponse {
                                    contract_addr: Addr::unchecked(pair),
                                };
                                let bin = to_json_binary(&resp).unwrap();
                                SystemResult::Ok(ContractResult::Ok(bin))
                            }
                            None => SystemResult::Ok(ContractResult::Err(format!(
                                "No pair registered for {} and {}",
                                token_a, token_b
                            ))),
                        };
                    }
                    panic!(
                        "Unexpected query to factory: {}",
                        String::from_utf8_lossy(msg)
                    );
                }

                // 3) cw20 canonical queries
                match from_json(msg).unwrap() {
                    Cw20QueryMsg::TokenInfo {} => {
                        let supply = self
                            .token_querier
                            .balances
                            .get(contract_addr)
                            .map(|m| m.values().copied().sum())
                            .unwrap_or_default();
                        let info = TokenInfoResponse {
                            name: "TOKEN".to_string(),
                            decimals: 6,
                            total_supply: supply,
                            symbol: "TKN".to_string(),
                        };
                        let bin = to_json_binary(&info).unwrap();
                        SystemResult::Ok(ContractResult::Ok(bin))
                    }
                    Cw20QueryMsg::Balance { address } => {
                        let bal = self
                            .token_querier
                            .balances
                            .get(contract_addr)
                            .and_then(|m| m.get(&address))
                            .copied()
                            .unwrap_or_default();
                        let resp = BalanceResponse { balance: bal };
                        let bin = to_json_binary(&resp).unwrap();
                        SystemResult::Ok(ContractResult::Ok(bin))
                    }
                    _ => panic!("Unexpected CW20 query: {:?}", msg),
                }
            }
            _ => self.base.handle_query(request),
        }
    }
}
