//! Standard math utilities missing in `alloy_primitives`.
use alloy_primitives::{U256, U512};

/// Trait for standard math utilities missing in `alloy_primitives`.
pub trait Math {
    /// Calculates `self` * `y` / `denominator` with full precision, rounding
    /// down.
    ///
    /// # Arguments
    ///
    /// * `self` - first value to compute the result.
    /// * `y` - second value to compute the result.
    /// * `denominator` - denominator of the division.
    ///
    /// # Panics
    ///
    /// * If `denominator` is zero.
    /// * If the result does not fit into `Self`.
    #[must_use]
    fn mul_div(self, y: Self, denominator: Self) -> Self;
}

impl Math for U256 {
    fn mul_div(self, y: Self, denominator: Self) -> Self {
        assert!(
            !denominator.is_zero(),
            "division by U256::ZERO in `Math::mul_div`"
        );

        // A 256 by 256 bit product always fits into 512 bits.
        let prod = U512::from(self) * U512::from(y);
        let result = prod / U512::from(denominator);

        assert!(
            result <= U512::from(U256::MAX),
            "should fit into `U256` in `Math::mul_div`"
        );
        U256::from(result)
    }
}
