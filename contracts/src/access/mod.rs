//! Access control for privileged token operations.
pub mod ownable;

pub use ownable::{Error as OwnableError, IOwnable, Ownable};
