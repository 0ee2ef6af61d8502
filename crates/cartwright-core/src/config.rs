use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::coupon::CouponBook;
use crate::error::CartError;

/// How `set_quantity` treats the value parsed from the quantity field.
///
/// The original site wrote `parseInt` output straight into the cart with no
/// validation, so zero, negative, and garbage input all landed in storage.
/// Whether that was a soft-delete mechanism or a bug is unknowable from the
/// outside; the policy keeps it a deployment choice instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum QuantityPolicy {
    /// Store the parsed value verbatim; unparseable input stores 0.
    #[default]
    Verbatim,
    /// Clamp stored quantities to at least this minimum.
    ClampMin(i64),
    /// Treat zero or negative input as removing the row.
    RemoveOnZero,
}

/// What happens to a row's price and image when the same product name is
/// added again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PricePolicy {
    /// Keep the values already in the cart (the original behavior: the
    /// incoming card's price and image are ignored on a repeat add).
    #[default]
    FirstSeen,
    /// Overwrite the row's price and image from the incoming product.
    LatestWins,
}

/// Shop-wide settings (`cartwright.json`).
///
/// Every field defaults to the original demo site's behavior, so an absent
/// or empty config file reproduces it exactly: $10 flat shipping, `$`
/// currency, `invoice.html` as the checkout target, and a coupon book
/// containing only `SAVE10`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ShopConfig {
    /// Flat shipping fee charged whenever the subtotal is non-zero.
    pub shipping_fee: f64,
    /// Prefix used when formatting money values.
    pub currency: String,
    /// Relative path of the invoice page reached from checkout.
    pub invoice_path: String,
    /// Recognized coupon codes.
    pub coupons: CouponBook,
    pub quantity_policy: QuantityPolicy,
    pub price_policy: PricePolicy,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            shipping_fee: 10.0,
            currency: "$".into(),
            invoice_path: "invoice.html".into(),
            coupons: CouponBook::default(),
            quantity_policy: QuantityPolicy::default(),
            price_policy: PricePolicy::default(),
        }
    }
}

impl ShopConfig {
    /// Load a config file.
    ///
    /// A missing file is not an error — it yields the defaults — but a file
    /// that exists and cannot be read or parsed is, since the caller
    /// explicitly asked for it. This is the opposite of the cart slot, whose
    /// corruption is silently treated as an empty cart.
    pub fn load(path: &Path) -> Result<Self, CartError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| CartError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CartError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
