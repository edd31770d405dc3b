//! Optional Metadata of the ERC-20 standard.
//!
//! Amounts of the token are fixed-point numbers with
//! [`DEFAULT_DECIMALS`] decimal places.
use alloc::{string::String, vec, vec::Vec};

use alloy_primitives::{uint, U8};
use stylus_sdk::{prelude::*, storage::StorageString};

/// Number of decimals used by default on implementors of [`Erc20Metadata`].
pub const DEFAULT_DECIMALS: U8 = uint!(18_U8);

/// State of an [`Erc20Metadata`] contract.
#[storage]
pub struct Erc20Metadata {
    /// Token name.
    pub(crate) name: StorageString,
    /// Token symbol.
    pub(crate) symbol: StorageString,
}

/// Interface for the optional metadata functions from the ERC-20 standard.
pub trait IErc20Metadata {
    /// Returns the name of the token.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    fn name(&self) -> String;

    /// Returns the symbol of the token, usually a shorter version of the name.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    fn symbol(&self) -> String;

    /// Returns the number of decimals used to get a user-friendly
    /// representation of values of this token.
    ///
    /// With 18 decimals a balance of `1010000000000000000` is displayed as
    /// `1.01`.
    ///
    /// NOTE: This information is only used for *display* purposes: in
    /// no way it affects any of the arithmetic of the contract, including
    /// surcharge computation.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    fn decimals(&self) -> U8;
}

#[public]
#[implements(IErc20Metadata)]
impl Erc20Metadata {
    /// Constructor.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `name` - Token name.
    /// * `symbol` - Token symbol.
    #[constructor]
    pub fn constructor(&mut self, name: String, symbol: String) {
        self.name.set_str(name);
        self.symbol.set_str(symbol);
    }
}

#[public]
impl IErc20Metadata for Erc20Metadata {
    fn name(&self) -> String {
        self.name.get_string()
    }

    fn symbol(&self) -> String {
        self.symbol.get_string()
    }

    fn decimals(&self) -> U8 {
        DEFAULT_DECIMALS
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::Address;
    use motsu::prelude::*;
    use stylus_sdk::prelude::*;

    use super::*;

    unsafe impl TopLevelStorage for Erc20Metadata {}

    #[motsu::test]
    fn constructs(contract: Contract<Erc20Metadata>, alice: Address) {
        let name: String = "FirstApproval".to_string();
        let symbol: String = "FAPP".to_string();

        contract.sender(alice).constructor(name.clone(), symbol.clone());

        assert_eq!(name, contract.sender(alice).name());
        assert_eq!(symbol, contract.sender(alice).symbol());
    }

    #[motsu::test]
    fn decimals_is_eighteen(contract: Contract<Erc20Metadata>, alice: Address) {
        assert_eq!(uint!(18_U8), contract.sender(alice).decimals());
    }
}
