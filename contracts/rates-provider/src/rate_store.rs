//! Rate table persistence.

use soroban_sdk::{Env, Vec};

use crate::storage::RatesKey;
use crate::table;

/// All rates in table order. Never-defined rates read as `0`.
pub(crate) fn all(env: &Env) -> Vec<u128> {
    env.storage()
        .instance()
        .get(&RatesKey::Rates)
        .unwrap_or_else(|| zeros(env))
}

pub(crate) fn get(env: &Env, index: u32) -> u128 {
    all(env).get(index).unwrap_or(0)
}

/// Overwrite the first `prefix.len()` rates, keeping the rest.
///
/// `prefix` must not be longer than the currency table.
pub(crate) fn overwrite_prefix(env: &Env, prefix: &Vec<u128>) {
    let mut rates = all(env);
    for (i, rate) in prefix.iter().enumerate() {
        rates.set(i as u32, rate);
    }
    env.storage().instance().set(&RatesKey::Rates, &rates);
}

pub(crate) fn updated_at(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&RatesKey::UpdatedAt)
        .unwrap_or(0)
}

pub(crate) fn stamp(env: &Env, at: u64) {
    env.storage().instance().set(&RatesKey::UpdatedAt, &at);
}

pub(crate) fn zeros(env: &Env) -> Vec<u128> {
    let mut rates = Vec::new(env);
    for _ in 0..table::len() {
        rates.push_back(0);
    }
    rates
}
