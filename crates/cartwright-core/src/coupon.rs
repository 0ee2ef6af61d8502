use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Coupon codes mapped to whole-number percentage discounts.
///
/// Codes match after trimming surrounding whitespace and uppercasing, so
/// `" save10 "` and `SAVE10` are the same coupon. The default book holds the
/// one code the original site recognized; deployments can extend it through
/// [`ShopConfig`](crate::config::ShopConfig).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CouponBook {
    codes: BTreeMap<String, u32>,
}

impl Default for CouponBook {
    fn default() -> Self {
        let mut book = Self::empty();
        book.insert("SAVE10", 10);
        book
    }
}

impl CouponBook {
    /// A book that rejects every code.
    pub fn empty() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    /// Register a code. Stored normalized so lookups stay case-insensitive.
    pub fn insert(&mut self, code: &str, percent: u32) {
        self.codes.insert(normalize(code), percent);
    }

    /// Discount percent for a user-entered code; 0 when unrecognized.
    ///
    /// Keys are re-normalized here as well, so a config file that spells a
    /// code in lowercase still matches.
    pub fn discount_percent(&self, code: &str) -> u32 {
        let wanted = normalize(code);
        self.codes
            .iter()
            .find(|(stored, _)| normalize(stored) == wanted)
            .map(|(_, percent)| *percent)
            .unwrap_or(0)
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}
