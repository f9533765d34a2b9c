//! Event emission helpers for the user registry contract.

use soroban_sdk::{Address, Env, Symbol};

/// Emit an event when a user id is issued for an address.
pub fn emit_user_registered(env: &Env, id: u64, address: &Address) {
    let topics = (Symbol::new(env, "user_registered"),);
    env.events().publish(topics, (id, address.clone()));
}

/// Emit an event when an address is bound to an existing user.
pub fn emit_address_attached(env: &Env, id: u64, address: &Address) {
    let topics = (Symbol::new(env, "address_attached"),);
    env.events().publish(topics, (id, address.clone()));
}

/// Emit an event when an address is unbound from its user.
pub fn emit_address_detached(env: &Env, id: u64, address: &Address) {
    let topics = (Symbol::new(env, "address_detached"),);
    env.events().publish(topics, (id, address.clone()));
}

/// Emit an event when a user is suspended.
pub fn emit_user_suspended(env: &Env, id: u64) {
    let topics = (Symbol::new(env, "user_suspended"),);
    env.events().publish(topics, id);
}

/// Emit an event when a suspension is lifted.
pub fn emit_user_unsuspended(env: &Env, id: u64) {
    let topics = (Symbol::new(env, "user_unsuspended"),);
    env.events().publish(topics, id);
}

/// Emit an event when validity and suspension are overwritten.
pub fn emit_user_updated(env: &Env, id: u64, valid_until: u64, suspended: bool) {
    let topics = (Symbol::new(env, "user_updated"),);
    env.events().publish(topics, (id, valid_until, suspended));
}

/// Emit an event when an extended attribute is set.
pub fn emit_user_extended(env: &Env, id: u64, key: u32, value: u128) {
    let topics = (Symbol::new(env, "user_extended"),);
    env.events().publish(topics, (id, key, value));
}
