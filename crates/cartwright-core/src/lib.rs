//! Headless shopping-cart engine for a static storefront.
//!
//! The engine owns an ordered cart of [`LineItem`]s, mirrors it into a named
//! key-value persistence slot after every mutation, projects it onto an
//! editable table with computed totals, applies coupon discounts for a single
//! render pass, and snapshots the cart for an external invoice page at
//! checkout. There is no server and no background work: every operation runs
//! to completion synchronously, and durability is entirely the persistence
//! backend's problem.
//!
//! The pieces compose bottom-up: [`Persistence`] is raw string storage,
//! [`CartStore`] adds slot names and JSON encoding, [`CartService`] owns the
//! in-memory cart and its mutation rules, and [`CartWidget`] wires the
//! service to a page surface and dispatches semantic [`Action`]s the way a
//! page's event bindings would.

pub mod action;
pub mod catalog;
pub mod config;
pub mod coupon;
pub mod error;
pub mod item;
pub mod render;
pub mod service;
pub mod storage;
pub mod totals;
pub mod widget;

pub use action::Action;
pub use catalog::{Catalog, Product};
pub use config::{PricePolicy, QuantityPolicy, ShopConfig};
pub use coupon::CouponBook;
pub use error::CartError;
pub use item::LineItem;
pub use render::{render_table, TableRow, TableView};
pub use service::{CartService, CheckoutOutcome};
pub use storage::{CartStore, FileStore, MemoryStore, Persistence, CART_SLOT, INVOICE_SLOT};
pub use totals::{format_money, parse_price_text, Totals};
pub use widget::{CartWidget, Notice, Outcome, Surface};
