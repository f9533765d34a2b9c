//! # Operable
//!
//! Owner-managed operator set for Soroban contracts.
//!
//! A contract seeds the set once from its constructor and then gates every
//! mutating entry point on [`Operators::require_operator`]. The set lives in
//! the calling contract's instance storage, so each contract carries its own
//! independent operators.
//!
//! ## Usage
//!
//! ```rust,ignore
//! pub fn __constructor(env: Env, owner: Address) {
//!     Operators::new(&env).init(&owner);
//! }
//!
//! pub fn mutate(env: Env, caller: Address) -> Result<(), MyError> {
//!     Operators::new(&env).require_operator(&caller)?;
//!     // ...
//!     Ok(())
//! }
//! ```

#![no_std]

mod events;

use soroban_sdk::{contracttype, log, Address, Env};

/// Storage keys owned by the operator set.
#[contracttype]
#[derive(Clone, Debug)]
pub enum AccessKey {
    /// Address allowed to manage operators.
    Owner,

    /// Operator membership flag.
    Operator(Address),
}

/// Access-control failures.
///
/// Contracts convert this into their own error enum with `From` so that
/// `?` propagates it as a stable contract error code.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AccessError {
    /// Caller does not hold operator status.
    NotOperator,
    /// Caller is not the owner.
    NotOwner,
}

/// Capability handle over the operator set of the current contract.
pub struct Operators<'a> {
    env: &'a Env,
}

impl<'a> Operators<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    /// Store `owner` and grant it operator status.
    ///
    /// Meant to be called exactly once, from a contract constructor.
    pub fn init(&self, owner: &Address) {
        self.env.storage().instance().set(&AccessKey::Owner, owner);
        self.set_operator(owner, true);
        events::emit_operator_added(self.env, owner);
    }

    /// Current owner, if the set was initialized.
    pub fn owner(&self) -> Option<Address> {
        self.env.storage().instance().get(&AccessKey::Owner)
    }

    pub fn is_operator(&self, address: &Address) -> bool {
        self.env
            .storage()
            .instance()
            .get(&AccessKey::Operator(address.clone()))
            .unwrap_or(false)
    }

    /// Fail unless `caller` is an operator, then require its authorization.
    pub fn require_operator(&self, caller: &Address) -> Result<(), AccessError> {
        if !self.is_operator(caller) {
            log!(self.env, "rejected non-operator", caller);
            return Err(AccessError::NotOperator);
        }

        caller.require_auth();
        Ok(())
    }

    /// Fail unless `caller` is the owner, then require its authorization.
    pub fn require_owner(&self, caller: &Address) -> Result<(), AccessError> {
        match self.owner() {
            Some(owner) if owner == *caller => {
                caller.require_auth();
                Ok(())
            }
            _ => Err(AccessError::NotOwner),
        }
    }

    /// Grant operator status (owner only). Granting twice is a no-op.
    pub fn add_operator(&self, operator: &Address, caller: &Address) -> Result<(), AccessError> {
        self.require_owner(caller)?;

        if !self.is_operator(operator) {
            self.set_operator(operator, true);
            events::emit_operator_added(self.env, operator);
        }
        Ok(())
    }

    /// Revoke operator status (owner only). Revoking a non-operator is a no-op.
    pub fn remove_operator(&self, operator: &Address, caller: &Address) -> Result<(), AccessError> {
        self.require_owner(caller)?;

        if self.is_operator(operator) {
            self.env
                .storage()
                .instance()
                .remove(&AccessKey::Operator(operator.clone()));
            events::emit_operator_removed(self.env, operator);
        }
        Ok(())
    }

    /// Hand the owner role to `new_owner` (owner only).
    ///
    /// Operator membership is left untouched.
    pub fn transfer_ownership(
        &self,
        new_owner: &Address,
        caller: &Address,
    ) -> Result<(), AccessError> {
        self.require_owner(caller)?;

        self.env.storage().instance().set(&AccessKey::Owner, new_owner);
        events::emit_ownership_transferred(self.env, caller, new_owner);
        Ok(())
    }

    fn set_operator(&self, address: &Address, enabled: bool) {
        self.env
            .storage()
            .instance()
            .set(&AccessKey::Operator(address.clone()), &enabled);
    }
}
