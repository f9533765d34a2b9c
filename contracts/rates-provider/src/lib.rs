//! # Rates Provider
//!
//! Operator-fed exchange rates between the base unit and a fixed set of fiat
//! and crypto currencies, with truncating fixed-point conversions.
//!
//! Rates are pushed by an operator with `define_rates`; nothing is fetched.
//! A rate of `0` means "undefined", and every conversion against an
//! undefined rate returns `0` so consumers can refuse to price instead of
//! trapping on a division by zero.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Operator publishes BTC..CHF rates, later currencies keep their value
//! client.define_rates(&vec![&env, 0, 0, 0, 0, 4825789016504], &operator);
//!
//! // A sale contract prices 10.00 CHF
//! let wei = client.convert_to_wei(&symbol_short!("CHF"), &1000);
//! ```

#![no_std]

mod convert;
mod events;
mod rate_store;
mod storage;
mod table;

pub use convert::WEI_PER_ETH;
pub use storage::RatesKey;
pub use table::{Currency, CURRENCY_TABLE};

use operable::{AccessError, Operators};
use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String, Symbol, Vec};

/// Error codes for the rates provider contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RatesError {
    /// Caller does not hold operator status.
    NotOperator = 1,
    /// Caller is not the provider owner.
    NotOwner = 2,
    /// More rates supplied than currencies exist.
    TooManyRates = 3,
}

impl From<AccessError> for RatesError {
    fn from(e: AccessError) -> Self {
        match e {
            AccessError::NotOperator => RatesError::NotOperator,
            AccessError::NotOwner => RatesError::NotOwner,
        }
    }
}

#[contract]
pub struct RatesProviderContract;

#[contractimpl]
impl RatesProviderContract {
    // ========== Construction ==========

    /// Deploy the provider with `owner` as first operator. All rates start
    /// undefined.
    pub fn __constructor(env: Env, owner: Address, name: String) {
        Operators::new(&env).init(&owner);

        env.storage().instance().set(&RatesKey::Name, &name);
        env.storage().instance().set(&RatesKey::Rates, &rate_store::zeros(&env));
    }

    pub fn name(env: Env) -> String {
        env.storage()
            .instance()
            .get(&RatesKey::Name)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }

    // ========== Operators ==========

    pub fn owner(env: Env) -> Option<Address> {
        Operators::new(&env).owner()
    }

    pub fn is_operator(env: Env, address: Address) -> bool {
        Operators::new(&env).is_operator(&address)
    }

    /// Grant operator status (owner only).
    pub fn add_operator(env: Env, operator: Address, caller: Address) -> Result<(), RatesError> {
        Ok(Operators::new(&env).add_operator(&operator, &caller)?)
    }

    /// Revoke operator status (owner only).
    pub fn remove_operator(env: Env, operator: Address, caller: Address) -> Result<(), RatesError> {
        Ok(Operators::new(&env).remove_operator(&operator, &caller)?)
    }

    /// Hand the owner role over (owner only).
    pub fn transfer_ownership(
        env: Env,
        new_owner: Address,
        caller: Address,
    ) -> Result<(), RatesError> {
        Ok(Operators::new(&env).transfer_ownership(&new_owner, &caller)?)
    }

    // ========== Rates ==========

    /// Define the rates of the first `rates.len()` currencies, in table order.
    ///
    /// Trailing currencies keep their current rate. The whole table is
    /// stamped with the current ledger time and a single `rate` event is
    /// emitted carrying the last currency of the batch.
    ///
    /// # Errors
    /// - `NotOperator` if caller is not an operator
    /// - `TooManyRates` if more rates than currencies are supplied
    pub fn define_rates(env: Env, rates: Vec<u128>, caller: Address) -> Result<(), RatesError> {
        Operators::new(&env).require_operator(&caller)?;

        if rates.len() > table::len() {
            return Err(RatesError::TooManyRates);
        }

        let at = env.ledger().timestamp();
        rate_store::overwrite_prefix(&env, &rates);
        rate_store::stamp(&env, at);

        log!(&env, "rates defined", at, rates.len());

        let last = rates.len().saturating_sub(1);
        events::emit_rate(&env, at, &table::code_at(last), rate_store::get(&env, last));
        Ok(())
    }

    /// Supported currency codes, in table order.
    pub fn currencies(env: Env) -> Vec<Symbol> {
        table::codes(&env)
    }

    /// Decimals of each currency, in table order.
    pub fn decimals(env: Env) -> Vec<u32> {
        table::decimals(&env)
    }

    /// Raw rates, in table order.
    pub fn rates(env: Env) -> Vec<u128> {
        rate_store::all(&env)
    }

    /// Ledger timestamp of the last `define_rates`, `0` if never defined.
    pub fn updated_at(env: Env) -> u64 {
        rate_store::updated_at(&env)
    }

    /// Base units per smallest unit of `currency`, `0` if undefined or unknown.
    pub fn rate(env: Env, currency: Symbol) -> u128 {
        Self::rate_internal(&env, &currency)
    }

    /// Rate of `currency` expressed as currency units per base token.
    pub fn rate_eth(env: Env, currency: Symbol, decimals: u32) -> u128 {
        let rate = Self::rate_internal(&env, &currency);
        Self::convert_rate(env, rate, currency, decimals)
    }

    // ========== Conversions ==========

    /// Reciprocal between a "currency per base token" quotation and a
    /// "base units per currency unit" one: `10^18 / value`, `0` for `0`.
    ///
    /// `currency` and `decimals` name the quotation context only; the
    /// arithmetic does not depend on them.
    pub fn convert_rate(_env: Env, value: u128, _currency: Symbol, _decimals: u32) -> u128 {
        convert::reciprocal(value)
    }

    /// Base units worth `amount` smallest units of `currency`.
    pub fn convert_to_wei(env: Env, currency: Symbol, amount: u128) -> u128 {
        convert::to_wei(amount, Self::rate_internal(&env, &currency))
    }

    /// Smallest units of `currency` worth `amount` base units.
    pub fn convert_from_wei(env: Env, currency: Symbol, amount: u128) -> u128 {
        convert::from_wei(amount, Self::rate_internal(&env, &currency))
    }

    // ========== Internal Helpers ==========

    fn rate_internal(env: &Env, currency: &Symbol) -> u128 {
        match table::index_of(currency) {
            Some(index) => rate_store::get(env, index),
            None => 0,
        }
    }
}
