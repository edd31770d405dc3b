//! Math helpers missing in `alloy_primitives` and `stylus_sdk::storage`.
pub mod alloy;
pub(crate) mod storage;
