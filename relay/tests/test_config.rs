//! Instantiation and configuration tests.
//!
//! The relay's only persisted state is the immutable collaborator triple;
//! these tests cover its validation, the config query, and migration.

use cosmwasm_std::{Addr, Empty};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use relay::msg::{ConfigResponse, InstantiateMsg, MigrateMsg, QueryMsg};

fn contract_relay() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        relay::contract::execute,
        relay::contract::instantiate,
        relay::contract::query,
    )
    .with_reply(relay::contract::reply)
    .with_migrate(relay::contract::migrate);
    Box::new(contract)
}

#[test]
fn test_instantiate_stores_collaborators() {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");

    let code_id = app.store_code(contract_relay());
    let relay_addr = app
        .instantiate_contract(
            code_id,
            admin.clone(),
            &InstantiateMsg {
                asset: "terra1asset".to_string(),
                sink: "terra1sink".to_string(),
                authority: "terra1authority".to_string(),
            },
            &[],
            "relay",
            Some(admin.to_string()),
        )
        .unwrap();

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(relay_addr, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.asset, Addr::unchecked("terra1asset"));
    assert_eq!(config.sink, Addr::unchecked("terra1sink"));
    assert_eq!(config.authority, Addr::unchecked("terra1authority"));
}

#[test]
fn test_instantiate_rejects_shared_asset_and_sink() {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");

    let code_id = app.store_code(contract_relay());
    let res = app.instantiate_contract(
        code_id,
        admin.clone(),
        &InstantiateMsg {
            asset: "terra1both".to_string(),
            sink: "terra1both".to_string(),
            authority: "terra1authority".to_string(),
        },
        &[],
        "relay",
        Some(admin.to_string()),
    );

    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("distinct contracts"), "got: {}", err_str);
}

#[test]
fn test_migrate_keeps_config() {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");

    let code_id = app.store_code(contract_relay());
    let relay_addr = app
        .instantiate_contract(
            code_id,
            admin.clone(),
            &InstantiateMsg {
                asset: "terra1asset".to_string(),
                sink: "terra1sink".to_string(),
                authority: "terra1authority".to_string(),
            },
            &[],
            "relay",
            Some(admin.to_string()),
        )
        .unwrap();

    let new_code_id = app.store_code(contract_relay());
    app.migrate_contract(admin, relay_addr.clone(), &MigrateMsg {}, new_code_id)
        .unwrap();

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(relay_addr, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.sink, Addr::unchecked("terra1sink"));
}
