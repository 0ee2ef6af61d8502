use std::fmt;

use crate::action::Action;
use crate::error::CartError;
use crate::render::{render_table, TableView};
use crate::service::{CartService, CheckoutOutcome};
use crate::storage::Persistence;

/// What the hosting page offers the widget.
///
/// A page without a cart table (the shop grid, the home page) runs the same
/// widget; renders just return `None` and everything else works unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Surface {
    pub has_cart_table: bool,
}

impl Surface {
    /// The cart page: table present.
    pub fn cart_page() -> Self {
        Self {
            has_cart_table: true,
        }
    }
}

/// A user-visible notification, the engine's stand-in for `alert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ItemAdded,
    CouponApplied { percent: u32 },
    CouponRejected,
    CartEmpty,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ItemAdded => write!(f, "Item added to cart!"),
            Notice::CouponApplied { percent } => write!(f, "Coupon Applied! {percent}% Off"),
            Notice::CouponRejected => write!(f, "Invalid Coupon"),
            Notice::CartEmpty => write!(f, "Your cart is empty!"),
        }
    }
}

/// Everything a dispatched action asks the host to do.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outcome {
    /// Notification to show, if any.
    pub notice: Option<Notice>,
    /// Page to navigate to (successful checkout only).
    pub navigate: Option<String>,
    /// Fresh table contents, when the surface has a cart table.
    pub table: Option<TableView>,
}

/// A [`CartService`] wired to a page surface.
///
/// `dispatch` is the engine's whole event layer: one synchronous
/// read-mutate-persist-render pass per action, mirroring how the original
/// handled one DOM event at a time to completion.
#[derive(Debug)]
pub struct CartWidget<P: Persistence> {
    service: CartService<P>,
    surface: Surface,
}

impl<P: Persistence> CartWidget<P> {
    pub fn new(service: CartService<P>, surface: Surface) -> Self {
        Self { service, surface }
    }

    pub fn service(&self) -> &CartService<P> {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut CartService<P> {
        &mut self.service
    }

    /// The page-load render. `None` off the cart page.
    pub fn render(&self) -> Option<TableView> {
        self.render_with_discount(0)
    }

    /// Run one action to completion.
    ///
    /// Mutating actions persist and re-render. A successful coupon renders
    /// its discount into the summary cells for this pass only — nothing is
    /// stored, so the next mutation or reload is back at full price.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, CartError> {
        match action {
            Action::Add(product) => {
                self.service.add_item(&product)?;
                Ok(Outcome {
                    notice: Some(Notice::ItemAdded),
                    navigate: None,
                    table: self.render(),
                })
            }
            Action::SetQuantity { index, value } => {
                self.service.set_quantity(index, &value)?;
                Ok(Outcome {
                    table: self.render(),
                    ..Outcome::default()
                })
            }
            Action::Remove { index } => {
                self.service.remove_item(index)?;
                Ok(Outcome {
                    table: self.render(),
                    ..Outcome::default()
                })
            }
            Action::ApplyCoupon { code } => {
                let percent = self.service.config().coupons.discount_percent(&code);
                let notice = if percent > 0 {
                    Notice::CouponApplied { percent }
                } else {
                    Notice::CouponRejected
                };
                Ok(Outcome {
                    notice: Some(notice),
                    navigate: None,
                    table: self.render_with_discount(percent),
                })
            }
            Action::Checkout => match self.service.checkout()? {
                CheckoutOutcome::EmptyCart => Ok(Outcome {
                    notice: Some(Notice::CartEmpty),
                    ..Outcome::default()
                }),
                CheckoutOutcome::Proceed { invoice_path } => Ok(Outcome {
                    navigate: Some(invoice_path),
                    ..Outcome::default()
                }),
            },
        }
    }

    fn render_with_discount(&self, discount_percent: u32) -> Option<TableView> {
        if !self.surface.has_cart_table {
            return None;
        }
        let totals = self.service.totals(discount_percent);
        Some(render_table(
            self.service.items(),
            &totals,
            &self.service.config().currency,
        ))
    }
}
