//! Fee and burn surcharges applied on every transfer of an [`Erc20`] token.
//!
//! The surcharge is configured by a settings tuple
//! `(treasury, fee_numerator, burn_numerator)`, both numerators interpreted
//! against [`FEE_DENOMINATOR`] (basis points). For a transfer of `value`:
//!
//! * `fee = value * fee_numerator / FEE_DENOMINATOR` is moved from the sender
//!   to the treasury,
//! * `burn = value * burn_numerator / FEE_DENOMINATOR` is destroyed from the
//!   sender's balance,
//! * the recipient receives exactly `value`.
//!
//! Both amounts are charged *on top of* `value`, so the sender is debited
//! `value + fee + burn`. Both are rounded down.
//!
//! Settings start zeroed, which means transfers are not surcharged until
//! [`Erc20Surcharge::_set_settings`] is called. This extension does not
//! restrict who may change the settings: the composing contract is expected
//! to guard the call (e.g. with [`crate::access::ownable::Ownable`]).
use alloc::{vec, vec::Vec};

use alloy_primitives::{uint, Address, U256};
pub use sol::*;
use stylus_sdk::{
    call::MethodError,
    evm,
    prelude::*,
    storage::{StorageAddress, StorageU256},
};

use crate::{
    token::erc20::{self, ERC20InsufficientBalance, Erc20, IErc20},
    utils::math::alloy::Math,
};

/// Denominator against which fee and burn numerators are interpreted.
///
/// A numerator of `100` is a 1% surcharge.
pub const FEE_DENOMINATOR: U256 = uint!(10000_U256);

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when the surcharge settings are replaced.
        ///
        /// * `treasury` - Account receiving collected fees.
        /// * `feeNumerator` - Fee fraction of the transferred amount.
        /// * `burnNumerator` - Burn fraction of the transferred amount.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event SettingsSet(address treasury, uint256 feeNumerator, uint256 burnNumerator);

        /// Emitted when a transfer moved a non-zero fee to the treasury.
        ///
        /// * `from` - Account that paid the fee.
        /// * `to` - Treasury the fee was credited to.
        /// * `amount` - Fee amount.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event FeeCollected(address indexed from, address indexed to, uint256 amount);
    }

    sol! {
        /// Indicates that the fee and burn numerators together exceed the
        /// denominator.
        ///
        /// * `fee_numerator` - Requested fee fraction.
        /// * `burn_numerator` - Requested burn fraction.
        /// * `denominator` - Denominator both fractions are relative to.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC20InvalidSurcharge(uint256 fee_numerator, uint256 burn_numerator, uint256 denominator);

        /// Indicates that a fee was requested without a treasury to collect
        /// it.
        ///
        /// * `treasury` - Rejected treasury address.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC20InvalidTreasury(address treasury);
    }
}

/// An [`Erc20Surcharge`] error.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// Indicates that the fee and burn numerators together exceed
    /// [`FEE_DENOMINATOR`].
    InvalidSurcharge(ERC20InvalidSurcharge),
    /// Indicates that a non-zero fee was requested with
    /// [`Address::ZERO`] as treasury.
    InvalidTreasury(ERC20InvalidTreasury),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of an [`Erc20Surcharge`] contract.
#[storage]
pub struct Erc20Surcharge {
    /// Account receiving collected fees.
    pub(crate) treasury: StorageAddress,
    /// Fee fraction, relative to [`FEE_DENOMINATOR`].
    pub(crate) fee_numerator: StorageU256,
    /// Burn fraction, relative to [`FEE_DENOMINATOR`].
    pub(crate) burn_numerator: StorageU256,
}

/// Read interface of the transfer surcharge.
pub trait IErc20Surcharge {
    /// Returns the current settings as
    /// `(treasury, fee_numerator, burn_numerator)`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    fn settings(&self) -> (Address, U256, U256);

    /// Returns the denominator the numerators are relative to.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    fn fee_denominator(&self) -> U256;

    /// Returns the `(fee, burn)` a transfer of `value` would be charged under
    /// the current settings.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `value` - Nominal amount of the transfer.
    fn surcharge(&self, value: U256) -> (U256, U256);
}

#[public]
#[implements(IErc20Surcharge)]
impl Erc20Surcharge {}

#[public]
impl IErc20Surcharge for Erc20Surcharge {
    fn settings(&self) -> (Address, U256, U256) {
        (
            self.treasury.get(),
            self.fee_numerator.get(),
            self.burn_numerator.get(),
        )
    }

    fn fee_denominator(&self) -> U256 {
        FEE_DENOMINATOR
    }

    fn surcharge(&self, value: U256) -> (U256, U256) {
        surcharge_of(
            value,
            self.fee_numerator.get(),
            self.burn_numerator.get(),
        )
    }
}

/// Computes `(fee, burn)` for a transfer of `value`, rounding down.
///
/// Never panics as long as both numerators are at most [`FEE_DENOMINATOR`],
/// since each result is then bounded by `value`.
#[must_use]
pub fn surcharge_of(
    value: U256,
    fee_numerator: U256,
    burn_numerator: U256,
) -> (U256, U256) {
    let fee = value.mul_div(fee_numerator, FEE_DENOMINATOR);
    let burn = value.mul_div(burn_numerator, FEE_DENOMINATOR);
    (fee, burn)
}

impl Erc20Surcharge {
    /// Replaces the settings tuple.
    ///
    /// Internal function without access restriction.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `treasury` - Account receiving collected fees.
    /// * `fee_numerator` - Fee fraction, relative to [`FEE_DENOMINATOR`].
    /// * `burn_numerator` - Burn fraction, relative to [`FEE_DENOMINATOR`].
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidSurcharge`] - If `fee_numerator + burn_numerator` is
    ///   greater than [`FEE_DENOMINATOR`].
    /// * [`Error::InvalidTreasury`] - If `treasury` is [`Address::ZERO`] while
    ///   `fee_numerator` is not zero.
    ///
    /// # Events
    ///
    /// * [`SettingsSet`].
    pub fn _set_settings(
        &mut self,
        treasury: Address,
        fee_numerator: U256,
        burn_numerator: U256,
    ) -> Result<(), Error> {
        let within_bounds = fee_numerator
            .checked_add(burn_numerator)
            .is_some_and(|total| total <= FEE_DENOMINATOR);
        if !within_bounds {
            return Err(Error::InvalidSurcharge(ERC20InvalidSurcharge {
                fee_numerator,
                burn_numerator,
                denominator: FEE_DENOMINATOR,
            }));
        }

        if treasury.is_zero() && !fee_numerator.is_zero() {
            return Err(Error::InvalidTreasury(ERC20InvalidTreasury {
                treasury,
            }));
        }

        self.treasury.set(treasury);
        self.fee_numerator.set(fee_numerator);
        self.burn_numerator.set(burn_numerator);

        evm::log(SettingsSet {
            treasury,
            feeNumerator: fee_numerator,
            burnNumerator: burn_numerator,
        });

        Ok(())
    }

    /// Moves `value` tokens from `from` to `to` and charges the surcharge to
    /// `from`.
    ///
    /// All checks happen before the first balance changes, so a failed call
    /// leaves `erc20` untouched.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `erc20` - Write access to the token balances.
    /// * `from` - Account to transfer tokens from.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - Amount the recipient receives.
    ///
    /// # Errors
    ///
    /// * [`erc20::Error::InvalidSender`] - If `from` is [`Address::ZERO`].
    /// * [`erc20::Error::InvalidReceiver`] - If `to` is [`Address::ZERO`].
    /// * [`erc20::Error::InsufficientBalance`] - If `from` cannot cover
    ///   `value + fee + burn`.
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`] for the nominal amount, the fee (to the
    ///   treasury) and the burn (to [`Address::ZERO`]), the latter two only
    ///   when non-zero.
    /// * [`FeeCollected`] when the fee is non-zero.
    pub fn transfer(
        &self,
        erc20: &mut Erc20,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), erc20::Error> {
        let (fee, burn) = self._check_debit(erc20, from, to, value)?;
        self._settle(erc20, from, to, value, fee, burn)
    }

    /// Moves `value` tokens from `from` to `to` on behalf of `spender` and
    /// charges the surcharge to `from`.
    ///
    /// The allowance must cover the full debit `value + fee + burn`. Infinite
    /// allowance is not decreased.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `erc20` - Write access to the token balances.
    /// * `spender` - Account spending the allowance.
    /// * `from` - Account to transfer tokens from.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - Amount the recipient receives.
    ///
    /// # Errors
    ///
    /// * [`erc20::Error::InvalidSender`] - If `from` is [`Address::ZERO`].
    /// * [`erc20::Error::InvalidReceiver`] - If `to` is [`Address::ZERO`].
    /// * [`erc20::Error::InsufficientBalance`] - If `from` cannot cover
    ///   `value + fee + burn`.
    /// * [`erc20::Error::InsufficientAllowance`] - If the allowance of
    ///   `spender` does not cover `value + fee + burn`.
    ///
    /// # Events
    ///
    /// * Same as [`Self::transfer`].
    pub fn transfer_from(
        &self,
        erc20: &mut Erc20,
        spender: Address,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), erc20::Error> {
        let (fee, burn) = self._check_debit(erc20, from, to, value)?;
        // Cannot overflow, `_check_debit` already summed these.
        erc20._spend_allowance(from, spender, value + fee + burn)?;
        self._settle(erc20, from, to, value, fee, burn)
    }

    /// Validates a surcharged transfer and returns its `(fee, burn)`.
    fn _check_debit(
        &self,
        erc20: &Erc20,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(U256, U256), erc20::Error> {
        Erc20::_check_parties(from, to)?;

        let (fee, burn) = self.surcharge(value);
        let Some(needed) =
            value.checked_add(fee).and_then(|debit| debit.checked_add(burn))
        else {
            // An unrepresentable debit can never be covered.
            return Err(erc20::Error::InsufficientBalance(
                ERC20InsufficientBalance {
                    sender: from,
                    balance: erc20.balance_of(from),
                    needed: U256::MAX,
                },
            ));
        };
        erc20._check_balance(from, needed)?;

        Ok((fee, burn))
    }

    /// Applies an already validated surcharged transfer.
    fn _settle(
        &self,
        erc20: &mut Erc20,
        from: Address,
        to: Address,
        value: U256,
        fee: U256,
        burn: U256,
    ) -> Result<(), erc20::Error> {
        let treasury = self.treasury.get();
        for leg in legs(to, value, treasury, fee, burn) {
            match leg {
                Leg::Nominal(to, value) => erc20._update(from, to, value)?,
                Leg::Fee(treasury, fee) => {
                    erc20._update(from, treasury, fee)?;
                    evm::log(FeeCollected { from, to: treasury, amount: fee });
                }
                Leg::Burn(burn) => erc20._update(from, Address::ZERO, burn)?,
            }
        }

        Ok(())
    }
}

/// One balance movement of a surcharged transfer, debited from the sender.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Leg {
    /// The nominal value, credited to the recipient.
    Nominal(Address, U256),
    /// The fee, credited to the treasury.
    Fee(Address, U256),
    /// The burn, removed from the total supply.
    Burn(U256),
}

/// Movements of a surcharged transfer in settlement order.
///
/// The nominal leg is always present. Fee and burn legs are skipped when
/// zero, so no event is logged for them.
fn legs(
    to: Address,
    value: U256,
    treasury: Address,
    fee: U256,
    burn: U256,
) -> impl Iterator<Item = Leg> {
    [Leg::Nominal(to, value), Leg::Fee(treasury, fee), Leg::Burn(burn)]
        .into_iter()
        .filter(|leg| match leg {
            Leg::Nominal(..) => true,
            Leg::Fee(_, amount) | Leg::Burn(amount) => !amount.is_zero(),
        })
}
