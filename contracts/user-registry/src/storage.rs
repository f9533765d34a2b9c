//! Storage key definitions for the user registry contract.

use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the user registry contract.
///
/// Contract-wide values live in instance storage, per-user entries in
/// persistent storage.
#[contracttype]
#[derive(Clone, Debug)]
pub enum RegistryKey {
    /// Registry display name.
    Name,

    /// Reference currency code of the registry.
    Currency,

    /// Number of user ids ever issued. Also the last issued id.
    UserCount,

    /// Maps user id to its validity record.
    User(u64),

    /// Maps a bound Address to its user id.
    /// Absence means the address is unbound.
    UserAddress(Address),

    /// Maps (user id, attribute key) to an attribute value.
    Extended(u64, u32),
}

/// Time-to-live for user data in ledger entries.
pub const USER_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const USER_TTL_EXTEND: u32 = 2592000; // ~150 days

/// Extend the TTL of a persistent entry after it was written.
pub(crate) fn extend(env: &Env, key: &RegistryKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, USER_TTL_THRESHOLD, USER_TTL_EXTEND);
}
