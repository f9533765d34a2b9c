//! Event emission helpers for the rates provider contract.

use soroban_sdk::{symbol_short, Env, Symbol};

/// Emit one event per rate definition.
///
/// Carries the definition time and one currency/rate pair of the batch.
pub fn emit_rate(env: &Env, at: u64, currency: &Symbol, rate: u128) {
    let topics = (symbol_short!("rate"),);
    env.events().publish(topics, (at, currency.clone(), rate));
}
