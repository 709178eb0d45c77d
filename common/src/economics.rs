// License economics derivation
//
// Pure projection over the issuer's raw inputs. Callers recompute on every
// read; the result is never stored, so edits can never show stale figures.

use serde::{Deserialize, Serialize};

/// Derived pricing figures for a listing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LicenseEconomics {
    /// USD price of a single license unit
    pub price_per_unit: f64,
    /// Fully diluted valuation, equal to the declared total value (USD)
    pub market_cap: u64,
    /// Units a licensee must hold to meet the minimum access amount
    pub min_access_units: u64,
}

impl LicenseEconomics {
    // Derive the figures from (total value, total supply, minimum access
    // amount), all in USD except the supply which is a unit count.
    //
    // Returns None when the figures are not computable: a zero supply, or a
    // zero total value with a non-zero minimum access amount. The sentinel is
    // what reaches the UI; Infinity and NaN never do.
    pub fn derive(total_value: u64, total_supply: u64, min_access: u64) -> Option<Self> {
        if total_supply == 0 {
            return None;
        }

        // price would be 0 and the minimum unit count unbounded
        if total_value == 0 && min_access > 0 {
            return None;
        }

        let price_per_unit = total_value as f64 / total_supply as f64;

        // ceil(min_access / price_per_unit) computed exactly as
        // ceil(min_access * total_supply / total_value) in u128
        let min_access_units = if min_access == 0 {
            0
        } else {
            let units = (min_access as u128 * total_supply as u128).div_ceil(total_value as u128);
            units.min(u64::MAX as u128) as u64
        };

        Some(Self {
            price_per_unit,
            market_cap: total_value,
            min_access_units,
        })
    }
}
