//! Fixed-point conversions between the base unit and currency units.
//!
//! A raw rate is the number of base units (wei, 10^-18 of one base token)
//! worth one smallest unit of a currency. Every operation truncates toward
//! zero and a zero rate yields zero instead of faulting.

/// Base units in one whole base token.
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Switch between "currency units per base token" and "base units per
/// currency unit" quotations.
///
/// Applying it twice returns the input up to truncation.
pub fn reciprocal(value: u128) -> u128 {
    if value == 0 {
        return 0;
    }
    WEI_PER_ETH / value
}

/// Base units worth `amount` smallest currency units at `rate`.
///
/// Overflow yields `0`, which callers already treat as "pricing unavailable".
pub fn to_wei(amount: u128, rate: u128) -> u128 {
    amount.checked_mul(rate).unwrap_or(0)
}

/// Smallest currency units worth `amount` base units at `rate`.
pub fn from_wei(amount: u128, rate: u128) -> u128 {
    if rate == 0 {
        return 0;
    }
    amount / rate
}
