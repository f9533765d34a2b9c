//! Event emission helpers for operator management.

use soroban_sdk::{Address, Env, Symbol};

/// Emit an event when an address gains operator status.
pub fn emit_operator_added(env: &Env, operator: &Address) {
    let topics = (Symbol::new(env, "operator_added"),);
    env.events().publish(topics, operator.clone());
}

/// Emit an event when an address loses operator status.
pub fn emit_operator_removed(env: &Env, operator: &Address) {
    let topics = (Symbol::new(env, "operator_removed"),);
    env.events().publish(topics, operator.clone());
}

/// Emit an event when the owner role changes hands.
pub fn emit_ownership_transferred(env: &Env, from: &Address, to: &Address) {
    let topics = (Symbol::new(env, "ownership_transferred"),);
    env.events().publish(topics, (from.clone(), to.clone()));
}
