//! Storage key definitions for the rates provider contract.

use soroban_sdk::contracttype;

/// Storage keys for the rates provider contract.
///
/// The whole rate table is small and read together, so everything lives in
/// instance storage.
#[contracttype]
#[derive(Clone, Debug)]
pub enum RatesKey {
    /// Provider display name.
    Name,

    /// Raw rates, one per currency in table order.
    Rates,

    /// Ledger timestamp of the last rate definition.
    UpdatedAt,
}
