//! Optional Burnable extension of the ERC-20 standard.
//!
//! Explicit burns are not surcharged: the caller destroys exactly `value`.

use alloy_primitives::{Address, U256};
use stylus_sdk::msg;

use crate::token::erc20::{self, ERC20InvalidSender, Erc20};

/// Extension of [`Erc20`] that allows token holders to destroy both
/// their own tokens and those that they have an allowance for,
/// in a way that can be recognized off-chain (via event analysis).
pub trait IErc20Burnable {
    /// The error type associated to this ERC-20 Burnable trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Destroys a `value` amount of tokens from the caller, lowering the total
    /// supply.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `value` - Amount to be burnt.
    ///
    /// # Errors
    ///
    /// * [`erc20::Error::InsufficientBalance`] - If the caller doesn't have
    ///   enough tokens.
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`].
    fn burn(&mut self, value: U256) -> Result<(), Self::Error>;

    /// Destroys a `value` amount of tokens from `account`, lowering the total
    /// supply and the caller's allowance.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `account` - Owner's address.
    /// * `value` - Amount to be burnt.
    ///
    /// # Errors
    ///
    /// * [`erc20::Error::InsufficientAllowance`] - If not enough allowance is
    ///   available.
    /// * [`erc20::Error::InvalidSender`] - If the `account` address is
    ///   [`Address::ZERO`].
    /// * [`erc20::Error::InsufficientBalance`] - If `account` doesn't have
    ///   enough tokens.
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`].
    fn burn_from(
        &mut self,
        account: Address,
        value: U256,
    ) -> Result<(), Self::Error>;
}

impl IErc20Burnable for Erc20 {
    type Error = erc20::Error;

    fn burn(&mut self, value: U256) -> Result<(), Self::Error> {
        let holder = msg::sender();
        self._burn(holder, value)
    }

    fn burn_from(
        &mut self,
        account: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        if account.is_zero() {
            return Err(erc20::Error::InvalidSender(ERC20InvalidSender {
                sender: Address::ZERO,
            }));
        }
        // Balance first: the allowance must not move for a burn that fails.
        self._check_balance(account, value)?;
        self._spend_allowance(account, msg::sender(), value)?;
        self._update(account, Address::ZERO, value)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{uint, Address, U256};
    use motsu::prelude::*;

    use super::IErc20Burnable;
    use crate::token::erc20::{
        ERC20InsufficientAllowance, ERC20InsufficientBalance,
        ERC20InvalidSender, Erc20, Error, IErc20,
    };

    #[motsu::test]
    fn burns(contract: Contract<Erc20>, alice: Address) {
        let one = U256::ONE;
        let two = uint!(2_U256);
        contract.sender(alice)._mint(alice, two).motsu_unwrap();

        contract.sender(alice).burn(one).motsu_unwrap();

        assert_eq!(one, contract.sender(alice).balance_of(alice));
        assert_eq!(one, contract.sender(alice).total_supply());
    }

    #[motsu::test]
    fn burn_reverts_when_insufficient_balance(
        contract: Contract<Erc20>,
        alice: Address,
    ) {
        let one = U256::ONE;

        let err = contract.sender(alice).burn(one).motsu_unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientBalance(ERC20InsufficientBalance {
                sender,
                balance,
                needed,
            }) if sender == alice && balance.is_zero() && needed == one
        ));
    }

    #[motsu::test]
    fn burns_from(contract: Contract<Erc20>, alice: Address, bob: Address) {
        let one = U256::ONE;
        let two = uint!(2_U256);
        contract.sender(alice)._mint(alice, two).motsu_unwrap();
        contract.sender(alice).approve(bob, one).motsu_unwrap();

        contract.sender(bob).burn_from(alice, one).motsu_unwrap();

        assert_eq!(one, contract.sender(alice).balance_of(alice));
        assert_eq!(one, contract.sender(alice).total_supply());
        assert_eq!(U256::ZERO, contract.sender(alice).allowance(alice, bob));
    }

    #[motsu::test]
    fn burn_from_reverts_when_insufficient_allowance(
        contract: Contract<Erc20>,
        alice: Address,
        bob: Address,
    ) {
        let one = U256::ONE;
        contract.sender(alice)._mint(alice, one).motsu_unwrap();

        let err = contract.sender(bob).burn_from(alice, one).motsu_unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientAllowance(ERC20InsufficientAllowance {
                spender,
                allowance,
                needed,
            }) if spender == bob && allowance.is_zero() && needed == one
        ));
        assert_eq!(one, contract.sender(alice).total_supply());
    }

    #[motsu::test]
    fn burn_from_keeps_allowance_when_insufficient_balance(
        contract: Contract<Erc20>,
        alice: Address,
        bob: Address,
    ) {
        let one = U256::ONE;
        let two = uint!(2_U256);
        let five = uint!(5_U256);
        contract.sender(alice)._mint(alice, one).motsu_unwrap();
        contract.sender(alice).approve(bob, five).motsu_unwrap();

        let err = contract.sender(bob).burn_from(alice, two).motsu_unwrap_err();

        assert!(matches!(
            err,
            Error::InsufficientBalance(ERC20InsufficientBalance {
                sender,
                balance,
                needed,
            }) if sender == alice && balance == one && needed == two
        ));
        assert_eq!(five, contract.sender(alice).allowance(alice, bob));
        assert_eq!(one, contract.sender(alice).balance_of(alice));
        assert_eq!(one, contract.sender(alice).total_supply());
    }

    #[motsu::test]
    fn burn_from_reverts_when_invalid_account(
        contract: Contract<Erc20>,
        bob: Address,
    ) {
        let err = contract
            .sender(bob)
            .burn_from(Address::ZERO, U256::ZERO)
            .motsu_unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidSender(ERC20InvalidSender { sender })
                if sender.is_zero()
        ));
    }
}
