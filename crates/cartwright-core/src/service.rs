use crate::catalog::Product;
use crate::config::{PricePolicy, QuantityPolicy, ShopConfig};
use crate::error::CartError;
use crate::item::LineItem;
use crate::storage::{CartStore, Persistence};
use crate::totals::Totals;

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing in the cart; no snapshot written, no navigation.
    EmptyCart,
    /// Snapshot written; navigate to the invoice page.
    Proceed { invoice_path: String },
}

/// The cart engine: an ordered list of line items mirrored into persistent
/// storage after every mutation.
///
/// Construct one per page context with [`CartService::open`]. Mutators
/// persist immediately — there is no commit step and no rollback — and hand
/// back fresh undiscounted [`Totals`] so the caller can re-render without a
/// second query. Insertion order is display order.
#[derive(Debug)]
pub struct CartService<P: Persistence> {
    items: Vec<LineItem>,
    store: CartStore<P>,
    config: ShopConfig,
}

impl<P: Persistence> CartService<P> {
    /// Open the cart persisted in `backend`, or an empty cart when the slot
    /// is absent or unreadable.
    pub fn open(backend: P, config: ShopConfig) -> Self {
        let store = CartStore::new(backend);
        let items = store.load_cart();
        Self {
            items,
            store,
            config,
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Totals for the current cart at the given discount percentage.
    pub fn totals(&self, discount_percent: u32) -> Totals {
        Totals::compute(&self.items, discount_percent, self.config.shipping_fee)
    }

    /// Add a product: an existing row with the same name gains quantity 1,
    /// otherwise a new row is appended with quantity 1.
    ///
    /// What happens to a changed price or image on a repeat add is the
    /// configured [`PricePolicy`]; the default keeps the first-seen values
    /// and ignores the incoming card entirely.
    pub fn add_item(&mut self, product: &Product) -> Result<Totals, CartError> {
        match self.items.iter_mut().find(|item| item.name == product.name) {
            Some(existing) => {
                existing.quantity += 1;
                if self.config.price_policy == PricePolicy::LatestWins {
                    existing.unit_price = product.unit_price();
                    existing.image = product.img.clone();
                }
            }
            None => self.items.push(product.to_line_item()),
        }
        self.persist()
    }

    /// Overwrite the quantity of the row at `index` from the raw field text.
    ///
    /// Parsing and bounds follow the configured [`QuantityPolicy`]; the
    /// default stores whatever the field parsed to, with unparseable input
    /// landing as 0. An out-of-range index changes nothing — the row was
    /// removed under the field's feet, and the re-render resolves it.
    pub fn set_quantity(&mut self, index: usize, raw: &str) -> Result<Totals, CartError> {
        let parsed = parse_quantity(raw);
        match self.config.quantity_policy {
            QuantityPolicy::Verbatim => {
                if let Some(item) = self.items.get_mut(index) {
                    item.quantity = parsed;
                }
            }
            QuantityPolicy::ClampMin(min) => {
                if let Some(item) = self.items.get_mut(index) {
                    item.quantity = parsed.max(min);
                }
            }
            QuantityPolicy::RemoveOnZero => {
                if parsed <= 0 {
                    if index < self.items.len() {
                        self.items.remove(index);
                    }
                } else if let Some(item) = self.items.get_mut(index) {
                    item.quantity = parsed;
                }
            }
        }
        self.persist()
    }

    /// Delete the row at `index`. Out-of-range is a no-op.
    pub fn remove_item(&mut self, index: usize) -> Result<Totals, CartError> {
        if index < self.items.len() {
            self.items.remove(index);
        }
        self.persist()
    }

    /// Drop every row.
    pub fn clear(&mut self) -> Result<Totals, CartError> {
        self.items.clear();
        self.persist()
    }

    /// Snapshot the cart for the invoice page and report where to navigate.
    ///
    /// An empty cart writes nothing and stays on the current page. A
    /// non-empty cart copies its exact current contents into the invoice
    /// slot; the live cart slot is untouched.
    pub fn checkout(&mut self) -> Result<CheckoutOutcome, CartError> {
        if self.items.is_empty() {
            return Ok(CheckoutOutcome::EmptyCart);
        }
        self.store.write_invoice_snapshot(&self.items)?;
        Ok(CheckoutOutcome::Proceed {
            invoice_path: self.config.invoice_path.clone(),
        })
    }

    /// The underlying store, for callers that inspect slots directly.
    pub fn store(&self) -> &CartStore<P> {
        &self.store
    }

    fn persist(&mut self) -> Result<Totals, CartError> {
        self.store.save_cart(&self.items)?;
        Ok(self.totals(0))
    }
}

/// `parseInt` semantics, minus NaN: a leading optionally-signed digit run
/// wins, anything else is 0.
fn parse_quantity(raw: &str) -> i64 {
    let s = raw.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}
