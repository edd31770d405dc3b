//! Single-owner access control.
//!
//! The owner is the only account allowed to perform privileged token
//! operations such as minting or replacing the transfer surcharge settings.
//! Contracts composing [`Ownable`] guard those operations with
//! [`Ownable::only_owner`].
//!
//! The initial owner is set by the deployer through [`Ownable::constructor`]
//! and can later be changed with [`IOwnable::transfer_ownership`] or given up
//! for good with [`IOwnable::renounce_ownership`].
use alloc::{vec, vec::Vec};

use alloy_primitives::Address;
pub use sol::*;
use stylus_sdk::{
    call::MethodError, evm, msg, prelude::*, storage::StorageAddress,
};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when ownership moves from `previous_owner` to `new_owner`.
        ///
        /// * `previous_owner` - Address of the previous owner.
        /// * `new_owner` - Address of the new owner.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event OwnershipTransferred(address indexed previous_owner, address indexed new_owner);
    }

    sol! {
        /// The caller account is not authorized to perform an operation.
        ///
        /// * `account` - Account that was found to not be authorized.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableUnauthorizedAccount(address account);
        /// The owner is not a valid owner account. (eg. [`Address::ZERO`])
        ///
        /// * `owner` - Account that's not allowed to become the owner.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableInvalidOwner(address owner);
    }
}

/// An error that occurred in the implementation of an [`Ownable`] contract.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The caller account is not authorized to perform an operation.
    UnauthorizedAccount(OwnableUnauthorizedAccount),
    /// The owner is not a valid owner account. (eg. [`Address::ZERO`])
    InvalidOwner(OwnableInvalidOwner),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of an [`Ownable`] contract.
#[storage]
pub struct Ownable {
    /// The current owner of this contract.
    pub(crate) owner: StorageAddress,
}

/// Interface for an [`Ownable`] contract.
pub trait IOwnable {
    /// The error type associated to the trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Returns the address of the current owner.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    #[must_use]
    fn owner(&self) -> Address;

    /// Transfers ownership of the contract to a new account (`new_owner`).
    /// Can only be called by the current owner.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `new_owner` - The next owner of this contract.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If not called by the owner.
    /// * [`Error::InvalidOwner`] - If `new_owner` is the [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    fn transfer_ownership(
        &mut self,
        new_owner: Address,
    ) -> Result<(), Self::Error>;

    /// Leaves the contract without owner. Minting and changing the surcharge
    /// settings become impossible afterwards.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If not called by the owner.
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    fn renounce_ownership(&mut self) -> Result<(), Self::Error>;
}

#[public]
#[implements(IOwnable<Error = Error>)]
impl Ownable {
    /// Constructor.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `initial_owner` - The initial owner of this contract.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOwner`] - If initial owner is [`Address::ZERO`].
    #[constructor]
    pub fn constructor(&mut self, initial_owner: Address) -> Result<(), Error> {
        Self::check_owner(initial_owner)?;
        self._transfer_ownership(initial_owner);
        Ok(())
    }
}

#[public]
impl IOwnable for Ownable {
    type Error = Error;

    fn owner(&self) -> Address {
        self.owner.get()
    }

    fn transfer_ownership(
        &mut self,
        new_owner: Address,
    ) -> Result<(), Self::Error> {
        self.only_owner()?;
        Self::check_owner(new_owner)?;
        self._transfer_ownership(new_owner);
        Ok(())
    }

    fn renounce_ownership(&mut self) -> Result<(), Self::Error> {
        self.only_owner()?;
        self._transfer_ownership(Address::ZERO);
        Ok(())
    }
}

impl Ownable {
    /// Rejects [`Address::ZERO`] as a prospective owner.
    fn check_owner(owner: Address) -> Result<(), Error> {
        if owner.is_zero() {
            return Err(Error::InvalidOwner(OwnableInvalidOwner { owner }));
        }
        Ok(())
    }

    /// Checks if the [`msg::sender`] is set as the owner.
    ///
    /// Call this first in every privileged operation, before any storage is
    /// written.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If called by any account other than
    ///   the owner.
    pub fn only_owner(&self) -> Result<(), Error> {
        let account = msg::sender();
        if self.owner.get() != account {
            return Err(Error::UnauthorizedAccount(
                OwnableUnauthorizedAccount { account },
            ));
        }

        Ok(())
    }

    /// Transfers ownership of the contract to a new account (`new_owner`).
    /// Internal function without access restriction.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `new_owner` - Account that is going to be the next owner.
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    pub fn _transfer_ownership(&mut self, new_owner: Address) {
        let previous_owner = self.owner.get();
        self.owner.set(new_owner);
        evm::log(OwnershipTransferred { previous_owner, new_owner });
    }
}

#[cfg(test)]
mod tests {
    use motsu::prelude::*;
    use stylus_sdk::{alloy_primitives::Address, prelude::*};

    use super::*;

    unsafe impl TopLevelStorage for Ownable {}

    fn owned_by(contract: &Contract<Ownable>, owner: Address) {
        contract
            .sender(owner)
            .constructor(owner)
            .motsu_expect("should set the initial owner");
    }

    #[motsu::test]
    fn deployer_becomes_initial_owner(
        contract: Contract<Ownable>,
        deployer: Address,
    ) {
        owned_by(&contract, deployer);

        assert_eq!(deployer, contract.sender(deployer).owner());
        contract.assert_emitted(&OwnershipTransferred {
            previous_owner: Address::ZERO,
            new_owner: deployer,
        });
    }

    #[motsu::test]
    fn constructor_rejects_zero_owner(
        contract: Contract<Ownable>,
        deployer: Address,
    ) {
        let err = contract
            .sender(deployer)
            .constructor(Address::ZERO)
            .motsu_expect_err("zero owner should be rejected");

        assert!(matches!(
            err,
            Error::InvalidOwner(OwnableInvalidOwner { owner })
                if owner.is_zero()
        ));
        assert_eq!(Address::ZERO, contract.sender(deployer).owner());
    }

    #[motsu::test]
    fn only_owner_guards_privileged_calls(
        contract: Contract<Ownable>,
        owner: Address,
        holder: Address,
    ) {
        owned_by(&contract, owner);

        contract
            .sender(owner)
            .only_owner()
            .motsu_expect("owner should pass the guard");

        let err = contract.sender(holder).only_owner().motsu_unwrap_err();
        assert!(matches!(
            err,
            Error::UnauthorizedAccount(OwnableUnauthorizedAccount { account })
                if account == holder
        ));
    }

    #[motsu::test]
    fn hands_over_ownership(
        contract: Contract<Ownable>,
        owner: Address,
        successor: Address,
    ) {
        owned_by(&contract, owner);

        contract
            .sender(owner)
            .transfer_ownership(successor)
            .motsu_expect("owner should hand over ownership");

        assert_eq!(successor, contract.sender(owner).owner());
        contract.assert_emitted(&OwnershipTransferred {
            previous_owner: owner,
            new_owner: successor,
        });

        // The previous owner lost its privileges.
        let err = contract.sender(owner).only_owner().motsu_unwrap_err();
        assert!(matches!(err, Error::UnauthorizedAccount(_)));
    }

    #[motsu::test]
    fn holder_cannot_take_ownership(
        contract: Contract<Ownable>,
        owner: Address,
        holder: Address,
    ) {
        owned_by(&contract, owner);

        let err = contract
            .sender(holder)
            .transfer_ownership(holder)
            .motsu_unwrap_err();

        assert!(matches!(
            err,
            Error::UnauthorizedAccount(OwnableUnauthorizedAccount { account })
                if account == holder
        ));
        assert_eq!(owner, contract.sender(holder).owner());
    }

    #[motsu::test]
    fn transfer_ownership_rejects_zero_owner(
        contract: Contract<Ownable>,
        owner: Address,
    ) {
        owned_by(&contract, owner);

        let err = contract
            .sender(owner)
            .transfer_ownership(Address::ZERO)
            .motsu_unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidOwner(OwnableInvalidOwner { owner: rejected })
                if rejected.is_zero()
        ));
        assert_eq!(owner, contract.sender(owner).owner());
    }

    #[motsu::test]
    fn renouncing_locks_privileged_calls(
        contract: Contract<Ownable>,
        owner: Address,
    ) {
        owned_by(&contract, owner);

        contract
            .sender(owner)
            .renounce_ownership()
            .motsu_expect("owner should renounce");

        assert_eq!(Address::ZERO, contract.sender(owner).owner());
        contract.assert_emitted(&OwnershipTransferred {
            previous_owner: owner,
            new_owner: Address::ZERO,
        });
        let err = contract.sender(owner).only_owner().motsu_unwrap_err();
        assert!(matches!(err, Error::UnauthorizedAccount(_)));
    }

    #[motsu::test]
    fn holder_cannot_renounce(
        contract: Contract<Ownable>,
        owner: Address,
        holder: Address,
    ) {
        owned_by(&contract, owner);

        let err =
            contract.sender(holder).renounce_ownership().motsu_unwrap_err();

        assert!(matches!(
            err,
            Error::UnauthorizedAccount(OwnableUnauthorizedAccount { account })
                if account == holder
        ));
        assert_eq!(owner, contract.sender(holder).owner());
    }
}
