/*!
# FirstApproval contracts for Stylus

Storage components for a fungible token that charges a configurable fee and
burn on every transfer, written in Rust for
[Arbitrum Stylus](https://docs.arbitrum.io/stylus/stylus-gentle-introduction).

Fee and burn are *surcharges*: the recipient always receives the nominal
amount, while the sender is additionally debited the fee (credited to a
treasury) and the burn (removed from the total supply).

## Usage

Compose the components into an `#[entrypoint]` contract and expose the
functions you need:

```ignore
use first_approval_contracts::{
    access::ownable::Ownable,
    token::erc20::{extensions::Erc20Surcharge, Erc20},
};

#[entrypoint]
#[storage]
struct MyToken {
    erc20: Erc20,
    surcharge: Erc20Surcharge,
    ownable: Ownable,
}

#[public]
impl MyToken {
    fn transfer(&mut self, to: Address, value: U256) -> Result<bool, Vec<u8>> {
        let from = msg::sender();
        self.surcharge.transfer(&mut self.erc20, from, to, value)?;
        Ok(true)
    }
}
```

See `demos/first-approval` for the complete contract.
*/

#![allow(
    clippy::module_name_repetitions,
    clippy::used_underscore_items,
    clippy::unreadable_literal
)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![deny(rustdoc::broken_intra_doc_links)]
extern crate alloc;

pub mod access;
pub mod token;
pub mod utils;
