//! Profit agreement math for the local-versus-contract comparison

use rust_decimal::prelude::*;

/// Relative gap `|a - b| / max(a, b)`. None when the larger side is not
/// positive, which leaves the ratio undefined.
pub fn relative_gap(local: Decimal, authoritative: Decimal) -> Option<Decimal> {
    let reference = local.max(authoritative);
    if reference <= Decimal::ZERO {
        return None;
    }
    Some((local - authoritative).abs() / reference)
}

/// Strict tolerance check on the relative gap. Two equal non-positive
/// figures agree trivially; unequal ones with no usable reference do not.
pub fn profits_within_tolerance(local: Decimal, authoritative: Decimal, tolerance: Decimal) -> bool {
    match relative_gap(local, authoritative) {
        Some(gap) => gap < tolerance,
        None => local == authoritative,
    }
}
