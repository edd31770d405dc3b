//! Common extensions to the ERC-20 standard.
pub mod burnable;
pub mod metadata;
pub mod surcharge;

pub use burnable::IErc20Burnable;
pub use metadata::{Erc20Metadata, IErc20Metadata};
pub use surcharge::{Erc20Surcharge, IErc20Surcharge, FEE_DENOMINATOR};
