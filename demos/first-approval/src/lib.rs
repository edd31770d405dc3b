//! FirstApproval: an ERC-20 token that charges a fee and a burn on top of
//! every transfer.
//!
//! The owner mints tokens and configures the surcharge settings. Every
//! `transfer` and `transferFrom` then debits the sender
//! `value + fee + burn`, credits the fee to the treasury, destroys the burn
//! and delivers exactly `value` to the recipient.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]

extern crate alloc;

use alloc::{string::String, vec::Vec};

use alloy_primitives::{Address, U256, U8};
use first_approval_contracts::{
    access::ownable::{self, IOwnable, Ownable},
    token::erc20::{
        self,
        extensions::{
            surcharge, Erc20Metadata, Erc20Surcharge, IErc20Burnable,
            IErc20Metadata, IErc20Surcharge,
        },
        Erc20, IErc20,
    },
};
use stylus_sdk::{msg, prelude::*};

/// Errors of the [`FirstApproval`] contract.
#[derive(SolidityError, Debug)]
enum Error {
    /// Balance, allowance or address validation failed.
    Erc20(erc20::Error),
    /// Surcharge settings were rejected.
    Surcharge(surcharge::Error),
    /// The caller is not the owner.
    Ownable(ownable::Error),
}

#[entrypoint]
#[storage]
struct FirstApproval {
    erc20: Erc20,
    metadata: Erc20Metadata,
    surcharge: Erc20Surcharge,
    ownable: Ownable,
}

#[public]
#[implements(IErc20<Error = erc20::Error>, IErc20Burnable<Error = erc20::Error>, IErc20Metadata, IErc20Surcharge, IOwnable<Error = ownable::Error>)]
impl FirstApproval {
    #[constructor]
    fn constructor(
        &mut self,
        initial_owner: Address,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        self.ownable.constructor(initial_owner)?;
        self.metadata.constructor(name, symbol);
        Ok(())
    }

    /// Creates `value` tokens for `to`. Owner only, never surcharged.
    fn mint(&mut self, to: Address, value: U256) -> Result<(), Error> {
        self.ownable.only_owner()?;
        self.erc20._mint(to, value)?;
        Ok(())
    }

    /// Replaces the surcharge settings. Owner only.
    fn set_settings(
        &mut self,
        treasury: Address,
        fee_numerator: U256,
        burn_numerator: U256,
    ) -> Result<(), Error> {
        self.ownable.only_owner()?;
        self.surcharge._set_settings(treasury, fee_numerator, burn_numerator)?;
        Ok(())
    }
}

#[public]
impl IErc20 for FirstApproval {
    type Error = erc20::Error;

    fn total_supply(&self) -> U256 {
        self.erc20.total_supply()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.erc20.balance_of(account)
    }

    fn transfer(
        &mut self,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.surcharge.transfer(&mut self.erc20, msg::sender(), to, value)?;
        Ok(true)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.erc20.allowance(owner, spender)
    }

    fn approve(
        &mut self,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.approve(spender, value)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.surcharge.transfer_from(
            &mut self.erc20,
            msg::sender(),
            from,
            to,
            value,
        )?;
        Ok(true)
    }
}

#[public]
impl IErc20Burnable for FirstApproval {
    type Error = erc20::Error;

    fn burn(&mut self, value: U256) -> Result<(), Self::Error> {
        self.erc20.burn(value)
    }

    fn burn_from(
        &mut self,
        account: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        self.erc20.burn_from(account, value)
    }
}

#[public]
impl IErc20Metadata for FirstApproval {
    fn name(&self) -> String {
        self.metadata.name()
    }

    fn symbol(&self) -> String {
        self.metadata.symbol()
    }

    fn decimals(&self) -> U8 {
        self.metadata.decimals()
    }
}

#[public]
impl IErc20Surcharge for FirstApproval {
    fn settings(&self) -> (Address, U256, U256) {
        self.surcharge.settings()
    }

    fn fee_denominator(&self) -> U256 {
        self.surcharge.fee_denominator()
    }

    fn surcharge(&self, value: U256) -> (U256, U256) {
        self.surcharge.surcharge(value)
    }
}

#[public]
impl IOwnable for FirstApproval {
    type Error = ownable::Error;

    fn owner(&self) -> Address {
        self.ownable.owner()
    }

    fn transfer_ownership(
        &mut self,
        new_owner: Address,
    ) -> Result<(), Self::Error> {
        self.ownable.transfer_ownership(new_owner)
    }

    fn renounce_ownership(&mut self) -> Result<(), Self::Error> {
        self.ownable.renounce_ownership()
    }
}
