//! Per-user validity record and its store.

use soroban_sdk::{contracttype, Env};

use crate::storage::{extend, RegistryKey};

/// Validity window and suspension flag of one identity.
///
/// A stored record is what makes a user id exist; addresses and extended
/// attributes hang off it but never decide existence.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    /// Last ledger timestamp (seconds) at which the user is still valid.
    pub valid_until: u64,

    /// Suspended users are invalid regardless of `valid_until`.
    pub suspended: bool,
}

impl User {
    pub fn new(valid_until: u64) -> Self {
        Self {
            valid_until,
            suspended: false,
        }
    }

    /// Check the validity predicate at ledger time `now`.
    pub fn is_valid_at(&self, now: u64) -> bool {
        !self.suspended && now <= self.valid_until
    }
}

pub(crate) fn read(env: &Env, id: u64) -> Option<User> {
    if id == 0 {
        return None;
    }
    env.storage().persistent().get(&RegistryKey::User(id))
}

pub(crate) fn write(env: &Env, id: u64, user: &User) {
    let key = RegistryKey::User(id);
    env.storage().persistent().set(&key, user);
    extend(env, &key);
}

/// Issue the next sequential user id. Ids start at 1 and are never reused.
pub(crate) fn next_id(env: &Env) -> u64 {
    let id = count(env) + 1;
    env.storage().instance().set(&RegistryKey::UserCount, &id);
    id
}

pub(crate) fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&RegistryKey::UserCount)
        .unwrap_or(0)
}
