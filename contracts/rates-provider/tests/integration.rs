//! Integration tests for the rates provider contract.

use rates_provider::{RatesError, RatesProviderContract, RatesProviderContractClient, WEI_PER_ETH};
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    vec, Address, Env, IntoVal, String, Symbol, Vec,
};

const NOW: u64 = 1_700_000_000;
const WEI_CHF_CENT: u128 = 4_825_789_016_504;
const ETH_CHF: u128 = 207_220;

fn setup() -> (Env, RatesProviderContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(NOW);

    let owner = Address::generate(&env);
    let contract_id = env.register(
        RatesProviderContract,
        (owner.clone(), String::from_str(&env, "Test")),
    );
    let client = RatesProviderContractClient::new(&env, &contract_id);

    (env, client, owner)
}

fn chf() -> Symbol {
    symbol_short!("CHF")
}

/// All currencies at 1 except CHF, and the last one left undefined.
fn define_sample_rates(env: &Env, client: &RatesProviderContractClient, operator: &Address) {
    client.define_rates(&vec![env, 1, 1, 1, 1, WEI_CHF_CENT, 1, 1, 1, 1], operator);
}

// ========== Empty provider ==========

#[test]
fn test_name() {
    let (env, client, owner) = setup();
    assert_eq!(client.name(), String::from_str(&env, "Test"));
    assert_eq!(client.owner(), Some(owner.clone()));
    assert!(client.is_operator(&owner));
}

#[test]
fn test_currencies() {
    let (env, client, _owner) = setup();
    let expected: Vec<Symbol> = vec![
        &env,
        symbol_short!("BTC"),
        symbol_short!("EOS"),
        symbol_short!("GBP"),
        symbol_short!("USD"),
        symbol_short!("CHF"),
        symbol_short!("EUR"),
        symbol_short!("CNY"),
        symbol_short!("JPY"),
        symbol_short!("CAD"),
        symbol_short!("AUD"),
    ];
    assert_eq!(client.currencies(), expected);
}

#[test]
fn test_decimals() {
    let (env, client, _owner) = setup();
    assert_eq!(client.decimals(), vec![&env, 9, 4, 2, 2, 2, 2, 2, 2, 2, 2]);
}

#[test]
fn test_no_rates() {
    let (env, client, _owner) = setup();
    assert_eq!(client.rates(), vec![&env, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(client.updated_at(), 0);
    assert_eq!(client.rate(&chf()), 0);
    assert_eq!(client.rate_eth(&chf(), &2), 0);
}

#[test]
fn test_convert_rate_from_eth_chf() {
    let (_env, client, _owner) = setup();
    assert_eq!(client.convert_rate(&ETH_CHF, &chf(), &2), WEI_CHF_CENT);
}

#[test]
fn test_convert_rate_to_eth_chf() {
    let (_env, client, _owner) = setup();
    assert_eq!(client.convert_rate(&WEI_CHF_CENT, &chf(), &2), ETH_CHF);
}

#[test]
fn test_convert_rate_of_zero() {
    let (_env, client, _owner) = setup();
    assert_eq!(client.convert_rate(&0, &chf(), &2), 0);
}

#[test]
fn test_conversions_without_rate_are_zero() {
    let (_env, client, _owner) = setup();
    assert_eq!(client.convert_to_wei(&chf(), &1000), 0);
    assert_eq!(client.convert_from_wei(&chf(), &WEI_PER_ETH), 0);
}

#[test]
fn test_unknown_currency_is_zero() {
    let (env, client, owner) = setup();
    define_sample_rates(&env, &client, &owner);

    let xyz = symbol_short!("XYZ");
    assert_eq!(client.rate(&xyz), 0);
    assert_eq!(client.rate_eth(&xyz, &2), 0);
    assert_eq!(client.convert_to_wei(&xyz, &1000), 0);
    assert_eq!(client.convert_from_wei(&xyz, &WEI_PER_ETH), 0);
}

// ========== Defining rates ==========

#[test]
fn test_operator_defines_rate() {
    let (env, client, owner) = setup();
    client.define_rates(&vec![&env, 0, 0, 0, 0, WEI_CHF_CENT], &owner);

    let events = env.events().all();
    let (contract, topics, data) = events.last().unwrap();
    assert_eq!(contract, client.address);
    assert_eq!(topics, (symbol_short!("rate"),).into_val(&env));
    let data: (u64, Symbol, u128) = data.into_val(&env);
    assert_eq!(data, (NOW, chf(), WEI_CHF_CENT));

    assert_eq!(client.rate(&chf()), WEI_CHF_CENT);
    assert_eq!(client.updated_at(), NOW);
}

#[test]
fn test_non_operator_cannot_define_rates() {
    let (env, client, _owner) = setup();
    let stranger = Address::generate(&env);

    assert_eq!(
        client.try_define_rates(&vec![&env, 0, 0, 0, 0, WEI_CHF_CENT], &stranger),
        Err(Ok(RatesError::NotOperator))
    );
    assert_eq!(client.rate(&chf()), 0);
    assert_eq!(client.updated_at(), 0);
}

#[test]
fn test_added_operator_defines_rates() {
    let (env, client, owner) = setup();
    let operator = Address::generate(&env);

    client.add_operator(&operator, &owner);
    client.define_rates(&vec![&env, 0, 0, 0, 0, WEI_CHF_CENT], &operator);
    assert_eq!(client.rate(&chf()), WEI_CHF_CENT);

    client.remove_operator(&operator, &owner);
    assert_eq!(
        client.try_define_rates(&vec![&env, 5], &operator),
        Err(Ok(RatesError::NotOperator))
    );
}

#[test]
fn test_too_many_rates() {
    let (env, client, owner) = setup();
    assert_eq!(
        client.try_define_rates(&vec![&env, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &owner),
        Err(Ok(RatesError::TooManyRates))
    );
    assert_eq!(client.rates(), vec![&env, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn test_full_table_refresh() {
    let (env, client, owner) = setup();
    client.define_rates(&vec![&env, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10], &owner);
    assert_eq!(client.rates(), vec![&env, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(client.rate(&symbol_short!("AUD")), 10);
}

#[test]
fn test_partial_refresh_keeps_trailing_rates() {
    let (env, client, owner) = setup();
    define_sample_rates(&env, &client, &owner);

    env.ledger().set_timestamp(NOW + 60);
    client.define_rates(&vec![&env, 7, 7], &owner);

    assert_eq!(
        client.rates(),
        vec![&env, 7, 7, 1, 1, WEI_CHF_CENT, 1, 1, 1, 1, 0]
    );
    assert_eq!(client.updated_at(), NOW + 60);
}

#[test]
fn test_empty_refresh_only_stamps() {
    let (env, client, owner) = setup();
    define_sample_rates(&env, &client, &owner);

    env.ledger().set_timestamp(NOW + 60);
    client.define_rates(&Vec::new(&env), &owner);

    // events only survive until the next invocation
    let events = env.events().all();
    assert_eq!(events.len(), 1);
    let (_, _, data) = events.last().unwrap();
    let data: (u64, Symbol, u128) = data.into_val(&env);
    assert_eq!(data, (NOW + 60, symbol_short!("BTC"), 1));

    assert_eq!(client.rate(&chf()), WEI_CHF_CENT);
    assert_eq!(client.updated_at(), NOW + 60);
}

// ========== With rates defined ==========

#[test]
fn test_updated_at_with_rates() {
    let (env, client, owner) = setup();
    define_sample_rates(&env, &client, &owner);
    assert_eq!(client.updated_at(), NOW);
}

#[test]
fn test_convert_chf_cents_to_wei() {
    let (env, client, owner) = setup();
    define_sample_rates(&env, &client, &owner);
    assert_eq!(client.convert_to_wei(&chf(), &1000), WEI_CHF_CENT * 1000);
}

#[test]
fn test_convert_wei_to_chf_cents() {
    let (env, client, owner) = setup();
    define_sample_rates(&env, &client, &owner);
    assert_eq!(client.convert_from_wei(&chf(), &WEI_PER_ETH), ETH_CHF);
}

#[test]
fn test_rate_eth() {
    let (env, client, owner) = setup();
    define_sample_rates(&env, &client, &owner);
    assert_eq!(client.rate_eth(&chf(), &2), ETH_CHF);
    assert_eq!(client.rate_eth(&symbol_short!("AUD"), &2), 0);
}

#[test]
fn test_wei_round_trip_within_one_cent() {
    let (env, client, owner) = setup();
    define_sample_rates(&env, &client, &owner);

    for amount in [1u128, WEI_CHF_CENT - 1, WEI_PER_ETH, 3 * WEI_PER_ETH + 17] {
        let cents = client.convert_from_wei(&chf(), &amount);
        let back = client.convert_to_wei(&chf(), &cents);
        assert!(back <= amount);
        assert!(amount - back < WEI_CHF_CENT);
    }
}

#[test]
fn test_conversion_overflow_is_zero() {
    let (env, client, owner) = setup();
    define_sample_rates(&env, &client, &owner);
    assert_eq!(client.convert_to_wei(&chf(), &u128::MAX), 0);
}
