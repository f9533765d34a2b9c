//! # User Registry
//!
//! Operator-managed identity registry for gating token distributions.
//!
//! Many addresses map to one sequential user id. Each user carries a validity
//! window, a suspension flag and open-ended integer attributes (such as a KYC
//! level). Consumers only ever read:
//!
//! - `is_address_valid` / `valid_user_id` to authorize a caller
//! - `valid_user` / `extended` / `many_extended` to read attributes
//!
//! A returned user id of `0` always means "not authorized".
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Operator onboards a user and records its KYC level
//! let id = client.register_user(&address, &valid_until, &operator);
//! client.update_user_extended(&id, &KYC_LEVEL_KEY, &2, &operator);
//!
//! // A sale contract checks the buyer
//! let (id, levels) = client.valid_user(&buyer, &vec![&env, KYC_LEVEL_KEY]);
//! ```

#![no_std]

mod address_book;
mod attributes;
mod events;
mod storage;
mod user;

pub use attributes::KYC_LEVEL_KEY;
pub use storage::RegistryKey;
pub use user::User;

use operable::{AccessError, Operators};
use soroban_sdk::{
    contract, contracterror, contractimpl, log, panic_with_error, Address, Env, String, Symbol,
    Vec,
};

use crate::events::*;

/// Error codes for the user registry contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// Caller does not hold operator status.
    NotOperator = 1,
    /// Caller is not the registry owner.
    NotOwner = 2,
    /// Referenced user id does not exist.
    UserNotFound = 3,
    /// Address is already bound to a user.
    AddressAlreadyBound = 4,
    /// Address is not bound to any user.
    AddressNotBound = 5,
    /// Caller's user does not own the address.
    NotAddressOwner = 6,
    /// Parallel input lists differ in length.
    LengthMismatch = 7,
    /// User is already suspended.
    AlreadySuspended = 8,
    /// User is not suspended.
    NotSuspended = 9,
}

impl From<AccessError> for RegistryError {
    fn from(e: AccessError) -> Self {
        match e {
            AccessError::NotOperator => RegistryError::NotOperator,
            AccessError::NotOwner => RegistryError::NotOwner,
        }
    }
}

#[contract]
pub struct UserRegistryContract;

#[contractimpl]
impl UserRegistryContract {
    // ========== Construction ==========

    /// Deploy the registry.
    ///
    /// `owner` becomes the first operator. Every address in `addresses` is
    /// registered as its own user, valid until `valid_until`, with ids
    /// assigned in input order.
    ///
    /// # Panics
    /// - If `addresses` contains the same address twice
    pub fn __constructor(
        env: Env,
        owner: Address,
        name: String,
        currency: Symbol,
        addresses: Vec<Address>,
        valid_until: u64,
    ) {
        Operators::new(&env).init(&owner);

        env.storage().instance().set(&RegistryKey::Name, &name);
        env.storage().instance().set(&RegistryKey::Currency, &currency);
        env.storage().instance().set(&RegistryKey::UserCount, &0u64);

        let no_extended = Vec::new(&env);
        for address in addresses.iter() {
            if let Err(e) = Self::register_internal(&env, &address, valid_until, &no_extended) {
                panic_with_error!(&env, e);
            }
        }
    }

    /// Registry display name.
    pub fn name(env: Env) -> String {
        env.storage()
            .instance()
            .get(&RegistryKey::Name)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }

    /// Reference currency of the registry.
    pub fn currency(env: Env) -> Symbol {
        env.storage()
            .instance()
            .get(&RegistryKey::Currency)
            .unwrap_or_else(|| Symbol::new(&env, ""))
    }

    // ========== Operators ==========

    pub fn owner(env: Env) -> Option<Address> {
        Operators::new(&env).owner()
    }

    pub fn is_operator(env: Env, address: Address) -> bool {
        Operators::new(&env).is_operator(&address)
    }

    /// Grant operator status (owner only).
    pub fn add_operator(env: Env, operator: Address, caller: Address) -> Result<(), RegistryError> {
        Ok(Operators::new(&env).add_operator(&operator, &caller)?)
    }

    /// Revoke operator status (owner only).
    pub fn remove_operator(
        env: Env,
        operator: Address,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Ok(Operators::new(&env).remove_operator(&operator, &caller)?)
    }

    /// Hand the owner role over (owner only).
    pub fn transfer_ownership(
        env: Env,
        new_owner: Address,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Ok(Operators::new(&env).transfer_ownership(&new_owner, &caller)?)
    }

    // ========== Queries ==========

    /// Number of user ids ever issued.
    pub fn user_count(env: Env) -> u64 {
        user::count(&env)
    }

    /// User id bound to `address`, or `0` when unbound.
    pub fn user_id(env: Env, address: Address) -> u64 {
        address_book::user_id(&env, &address)
    }

    /// User id bound to `address` if that user is currently valid, else `0`.
    pub fn valid_user_id(env: Env, address: Address) -> u64 {
        let id = address_book::user_id(&env, &address);
        if Self::is_valid_internal(&env, id) {
            id
        } else {
            0
        }
    }

    /// `(valid_until, suspended)` of a user. Unknown ids yield `(0, false)`.
    pub fn validity(env: Env, id: u64) -> (u64, bool) {
        match user::read(&env, id) {
            Some(user) => (user.valid_until, user.suspended),
            None => (0, false),
        }
    }

    /// Attribute value, `0` when unset or when the user does not exist.
    pub fn extended(env: Env, id: u64, key: u32) -> u128 {
        attributes::get(&env, id, key)
    }

    /// Attribute values for `keys`, in order.
    pub fn many_extended(env: Env, id: u64, keys: Vec<u32>) -> Vec<u128> {
        attributes::get_many(&env, id, &keys)
    }

    /// Whether the user exists, is not suspended and has not expired.
    pub fn is_valid(env: Env, id: u64) -> bool {
        Self::is_valid_internal(&env, id)
    }

    /// Whether `address` is bound to a currently valid user.
    pub fn is_address_valid(env: Env, address: Address) -> bool {
        Self::is_valid_internal(&env, address_book::user_id(&env, &address))
    }

    /// Valid user id bound to `address` together with the requested
    /// attributes. Unbound or invalid addresses yield `(0, [0; keys.len()])`.
    pub fn valid_user(env: Env, address: Address, keys: Vec<u32>) -> (u64, Vec<u128>) {
        let id = address_book::user_id(&env, &address);
        if Self::is_valid_internal(&env, id) {
            (id, attributes::get_many(&env, id, &keys))
        } else {
            (0, attributes::zeros(&env, keys.len()))
        }
    }

    // ========== Registration ==========

    /// Register `address` as a new user and return its id.
    ///
    /// # Errors
    /// - `NotOperator` if caller is not an operator
    /// - `AddressAlreadyBound` if `address` already belongs to a user
    pub fn register_user(
        env: Env,
        address: Address,
        valid_until: u64,
        caller: Address,
    ) -> Result<u64, RegistryError> {
        Operators::new(&env).require_operator(&caller)?;
        Self::register_internal(&env, &address, valid_until, &Vec::new(&env))
    }

    /// Register each address as its own new user, ids in input order.
    pub fn register_many_users(
        env: Env,
        addresses: Vec<Address>,
        valid_until: u64,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Operators::new(&env).require_operator(&caller)?;

        let no_extended = Vec::new(&env);
        for address in addresses.iter() {
            Self::register_internal(&env, &address, valid_until, &no_extended)?;
        }
        Ok(())
    }

    /// Register `address` and seed attributes `0..extended_values.len()`.
    pub fn register_user_full(
        env: Env,
        address: Address,
        valid_until: u64,
        extended_values: Vec<u128>,
        caller: Address,
    ) -> Result<u64, RegistryError> {
        Operators::new(&env).require_operator(&caller)?;
        Self::register_internal(&env, &address, valid_until, &extended_values)
    }

    /// Register many users, seeding every one with the same attributes.
    pub fn register_many_users_full(
        env: Env,
        addresses: Vec<Address>,
        valid_until: u64,
        extended_values: Vec<u128>,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Operators::new(&env).require_operator(&caller)?;

        for address in addresses.iter() {
            Self::register_internal(&env, &address, valid_until, &extended_values)?;
        }
        Ok(())
    }

    // ========== Addresses ==========

    /// Bind `address` to the existing user `id`.
    ///
    /// # Errors
    /// - `UserNotFound` if `id` does not exist
    /// - `AddressAlreadyBound` if `address` belongs to any user, `id` included
    pub fn attach_address(
        env: Env,
        id: u64,
        address: Address,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Operators::new(&env).require_operator(&caller)?;
        Self::attach_internal(&env, id, &address)
    }

    /// Bind `addresses[i]` to `ids[i]` for every `i`.
    pub fn attach_many_addresses(
        env: Env,
        ids: Vec<u64>,
        addresses: Vec<Address>,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Operators::new(&env).require_operator(&caller)?;

        if ids.len() != addresses.len() {
            return Err(RegistryError::LengthMismatch);
        }

        for (id, address) in ids.iter().zip(addresses.iter()) {
            Self::attach_internal(&env, id, &address)?;
        }
        Ok(())
    }

    /// Unbind `address` from its user. The user itself is kept.
    pub fn detach_address(
        env: Env,
        address: Address,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Operators::new(&env).require_operator(&caller)?;
        Self::detach_internal(&env, &address)
    }

    /// Unbind every address in `addresses`.
    pub fn detach_many_addresses(
        env: Env,
        addresses: Vec<Address>,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Operators::new(&env).require_operator(&caller)?;

        for address in addresses.iter() {
            Self::detach_internal(&env, &address)?;
        }
        Ok(())
    }

    /// Unbind the caller's own address.
    pub fn detach_self(env: Env, caller: Address) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::detach_internal(&env, &caller)
    }

    /// Unbind another address belonging to the caller's user.
    ///
    /// # Errors
    /// - `AddressNotBound` if `address` is unbound
    /// - `NotAddressOwner` if `address` belongs to a different user than the caller
    pub fn detach_self_address(
        env: Env,
        address: Address,
        caller: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();

        let id = address_book::user_id(&env, &address);
        if id == 0 {
            return Err(RegistryError::AddressNotBound);
        }
        if address_book::user_id(&env, &caller) != id {
            return Err(RegistryError::NotAddressOwner);
        }

        Self::detach_internal(&env, &address)
    }

    // ========== Validity ==========

    /// Suspend a user.
    ///
    /// # Errors
    /// - `UserNotFound` if `id` does not exist
    /// - `AlreadySuspended` if the user is suspended already
    pub fn suspend_user(env: Env, id: u64, caller: Address) -> Result<(), RegistryError> {
        Operators::new(&env).require_operator(&caller)?;
        Self::suspend_internal(&env, id)
    }

    pub fn suspend_many_users(
        env: Env,
        ids: Vec<u64>,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Operators::new(&env).require_operator(&caller)?;

        for id in ids.iter() {
            Self::suspend_internal(&env, id)?;
        }
        Ok(())
    }

    /// Lift a suspension.
    ///
    /// # Errors
    /// - `UserNotFound` if `id` does not exist
    /// - `NotSuspended` if the user is not suspended
    pub fn unsuspend_user(env: Env, id: u64, caller: Address) -> Result<(), RegistryError> {
        Operators::new(&env).require_operator(&caller)?;
        Self::unsuspend_internal(&env, id)
    }

    pub fn unsuspend_many_users(
        env: Env,
        ids: Vec<u64>,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Operators::new(&env).require_operator(&caller)?;

        for id in ids.iter() {
            Self::unsuspend_internal(&env, id)?;
        }
        Ok(())
    }

    /// Overwrite both the validity window and the suspension flag.
    pub fn update_user(
        env: Env,
        id: u64,
        valid_until: u64,
        suspended: bool,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Operators::new(&env).require_operator(&caller)?;
        Self::update_internal(&env, id, valid_until, suspended)
    }

    pub fn update_many_users(
        env: Env,
        ids: Vec<u64>,
        valid_until: u64,
        suspended: bool,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Operators::new(&env).require_operator(&caller)?;

        for id in ids.iter() {
            Self::update_internal(&env, id, valid_until, suspended)?;
        }
        Ok(())
    }

    // ========== Extended Attributes ==========

    /// Set attribute `key` of user `id` to `value`.
    pub fn update_user_extended(
        env: Env,
        id: u64,
        key: u32,
        value: u128,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Operators::new(&env).require_operator(&caller)?;
        Self::update_extended_internal(&env, id, key, value)
    }

    /// Set attribute `key` to the same `value` for every user in `ids`.
    pub fn update_many_users_extended(
        env: Env,
        ids: Vec<u64>,
        key: u32,
        value: u128,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Operators::new(&env).require_operator(&caller)?;

        for id in ids.iter() {
            Self::update_extended_internal(&env, id, key, value)?;
        }
        Ok(())
    }

    // ========== Internal Helpers ==========
    //
    // Batch entry points stop at the first error; the host then discards
    // every write the invocation made, so a batch applies fully or not at all.

    fn is_valid_internal(env: &Env, id: u64) -> bool {
        user::read(env, id)
            .map(|u| u.is_valid_at(env.ledger().timestamp()))
            .unwrap_or(false)
    }

    fn existing_user(env: &Env, id: u64) -> Result<User, RegistryError> {
        user::read(env, id).ok_or(RegistryError::UserNotFound)
    }

    fn register_internal(
        env: &Env,
        address: &Address,
        valid_until: u64,
        extended_values: &Vec<u128>,
    ) -> Result<u64, RegistryError> {
        if address_book::is_bound(env, address) {
            log!(env, "address already registered", address.clone());
            return Err(RegistryError::AddressAlreadyBound);
        }

        let id = user::next_id(env);
        user::write(env, id, &User::new(valid_until));
        address_book::bind(env, address, id);
        attributes::seed(env, id, extended_values);

        emit_user_registered(env, id, address);
        Ok(id)
    }

    fn attach_internal(env: &Env, id: u64, address: &Address) -> Result<(), RegistryError> {
        Self::existing_user(env, id)?;

        if address_book::is_bound(env, address) {
            return Err(RegistryError::AddressAlreadyBound);
        }

        address_book::bind(env, address, id);
        emit_address_attached(env, id, address);
        Ok(())
    }

    fn detach_internal(env: &Env, address: &Address) -> Result<(), RegistryError> {
        let id = address_book::user_id(env, address);
        if id == 0 {
            return Err(RegistryError::AddressNotBound);
        }

        address_book::unbind(env, address);
        emit_address_detached(env, id, address);
        Ok(())
    }

    fn suspend_internal(env: &Env, id: u64) -> Result<(), RegistryError> {
        let mut user = Self::existing_user(env, id)?;
        if user.suspended {
            return Err(RegistryError::AlreadySuspended);
        }

        user.suspended = true;
        user::write(env, id, &user);
        emit_user_suspended(env, id);
        Ok(())
    }

    fn unsuspend_internal(env: &Env, id: u64) -> Result<(), RegistryError> {
        let mut user = Self::existing_user(env, id)?;
        if !user.suspended {
            return Err(RegistryError::NotSuspended);
        }

        user.suspended = false;
        user::write(env, id, &user);
        emit_user_unsuspended(env, id);
        Ok(())
    }

    fn update_internal(
        env: &Env,
        id: u64,
        valid_until: u64,
        suspended: bool,
    ) -> Result<(), RegistryError> {
        Self::existing_user(env, id)?;

        user::write(
            env,
            id,
            &User {
                valid_until,
                suspended,
            },
        );
        emit_user_updated(env, id, valid_until, suspended);
        Ok(())
    }

    fn update_extended_internal(
        env: &Env,
        id: u64,
        key: u32,
        value: u128,
    ) -> Result<(), RegistryError> {
        Self::existing_user(env, id)?;

        attributes::set(env, id, key, value);
        emit_user_extended(env, id, key, value);
        Ok(())
    }
}
