//! Extended per-user attributes.
//!
//! Keys and values are opaque integers. The registry attaches no meaning to
//! them; consumers agree on conventions such as [`KYC_LEVEL_KEY`].

use soroban_sdk::{Env, Vec};

use crate::storage::{extend, RegistryKey};

/// Attribute key conventionally holding the KYC level of a user.
pub const KYC_LEVEL_KEY: u32 = 1;

pub(crate) fn get(env: &Env, id: u64, key: u32) -> u128 {
    env.storage()
        .persistent()
        .get(&RegistryKey::Extended(id, key))
        .unwrap_or(0)
}

pub(crate) fn get_many(env: &Env, id: u64, keys: &Vec<u32>) -> Vec<u128> {
    let mut values = Vec::new(env);
    for key in keys.iter() {
        values.push_back(get(env, id, key));
    }
    values
}

pub(crate) fn set(env: &Env, id: u64, key: u32, value: u128) {
    let k = RegistryKey::Extended(id, key);
    env.storage().persistent().set(&k, &value);
    extend(env, &k);
}

/// Seed attributes `0..values.len()` from a positional list.
pub(crate) fn seed(env: &Env, id: u64, values: &Vec<u128>) {
    for (key, value) in values.iter().enumerate() {
        set(env, id, key as u32, value);
    }
}

/// A zero for every requested key, returned for unknown or invalid users.
pub(crate) fn zeros(env: &Env, len: u32) -> Vec<u128> {
    let mut values = Vec::new(env);
    for _ in 0..len {
        values.push_back(0);
    }
    values
}
