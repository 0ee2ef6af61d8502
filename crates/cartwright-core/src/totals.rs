use crate::item::LineItem;

/// Computed cart totals for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub subtotal: f64,
    pub discount: f64,
    pub shipping: f64,
    pub total: f64,
}

impl Totals {
    /// Compute totals over `items`.
    ///
    /// Shipping is a flat fee charged only when the subtotal is non-zero, so
    /// an empty cart totals to zero rather than to the fee. The discount is a
    /// plain percentage of the subtotal; it is never persisted and lives for
    /// this computation only.
    pub fn compute(items: &[LineItem], discount_percent: u32, shipping_fee: f64) -> Self {
        let subtotal: f64 = items.iter().map(LineItem::line_subtotal).sum();
        let discount = subtotal * f64::from(discount_percent) / 100.0;
        let shipping = if subtotal > 0.0 { shipping_fee } else { 0.0 };
        Totals {
            subtotal,
            discount,
            shipping,
            total: subtotal - discount + shipping,
        }
    }
}

/// Format an amount the way the site displayed it: currency prefix plus two
/// decimals (`$499.99`).
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{currency}{amount:.2}")
}

/// Parse the text of a product-card price element (`$499.99`).
///
/// Returns `f64::NAN` when the text, minus an optional `$` prefix, is not a
/// number. The NaN then flows through totals arithmetic instead of aborting
/// the add — a malformed card corrupts its own row, nothing more.
pub fn parse_price_text(text: &str) -> f64 {
    let trimmed = text.trim();
    let stripped = trimmed.strip_prefix('$').unwrap_or(trimmed);
    stripped.trim().parse().unwrap_or(f64::NAN)
}
