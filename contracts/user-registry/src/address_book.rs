//! Address to user id index.
//!
//! Each address resolves to at most one user id; many addresses may resolve
//! to the same id. `0` stands for "unbound".

use soroban_sdk::{Address, Env};

use crate::storage::{extend, RegistryKey};

pub(crate) fn user_id(env: &Env, address: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&RegistryKey::UserAddress(address.clone()))
        .unwrap_or(0)
}

pub(crate) fn is_bound(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&RegistryKey::UserAddress(address.clone()))
}

pub(crate) fn bind(env: &Env, address: &Address, id: u64) {
    let key = RegistryKey::UserAddress(address.clone());
    env.storage().persistent().set(&key, &id);
    extend(env, &key);
}

pub(crate) fn unbind(env: &Env, address: &Address) {
    env.storage()
        .persistent()
        .remove(&RegistryKey::UserAddress(address.clone()));
}
