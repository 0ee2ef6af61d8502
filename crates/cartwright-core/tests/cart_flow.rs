//! Cross-module flows: persistence across sessions, the file-backed store,
//! and the action layer driving the service end to end.

use cartwright_core::{
    Action, CartService, CartStore, CartWidget, FileStore, LineItem, MemoryStore, Persistence,
    Product, ShopConfig, Surface, CART_SLOT,
};

fn product(name: &str, price_text: &str) -> Product {
    Product::new(name, price_text, format!("img/{name}.jpg"))
}

// ── Session durability ──────────────────────────────────────────────

#[test]
fn reopening_reproduces_items_and_subtotal() {
    let mut first = CartService::open(MemoryStore::new(), ShopConfig::default());
    first.add_item(&product("Shirt", "$78.00")).unwrap();
    first.add_item(&product("Shoes", "$120.00")).unwrap();
    first.set_quantity(0, "2").unwrap();
    let before = first.totals(0);

    // Same backend, fresh session — like a page reload.
    let backend = first.store().backend().clone();
    let second = CartService::open(backend, ShopConfig::default());

    assert_eq!(second.items(), first.items());
    assert_eq!(second.totals(0), before);
    assert_eq!(second.totals(0).subtotal, 276.0);
}

#[test]
fn cart_persisted_by_the_original_site_loads() {
    // Verbatim localStorage contents from the demo site.
    let mut backend = MemoryStore::new();
    backend
        .save(
            CART_SLOT,
            r#"[{"name":"Cartoon Astronaut T-Shirt","price":78,"img":"img/products/f1.jpg","quantity":2}]"#,
        )
        .unwrap();
    let svc = CartService::open(backend, ShopConfig::default());
    assert_eq!(svc.items().len(), 1);
    assert_eq!(svc.items()[0].unit_price, 78.0);
    assert_eq!(svc.totals(0).subtotal, 156.0);
}

#[test]
fn corrupt_slot_starts_empty_and_heals_on_next_save() {
    let mut backend = MemoryStore::new();
    backend.save(CART_SLOT, "][ definitely not json").unwrap();
    let mut svc = CartService::open(backend, ShopConfig::default());
    assert!(svc.is_empty());

    svc.add_item(&product("Shirt", "$78.00")).unwrap();
    assert_eq!(svc.store().load_cart().len(), 1);
}

// ── File-backed store ───────────────────────────────────────────────

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut svc = CartService::open(store, ShopConfig::default());
        svc.add_item(&product("Shirt", "$78.00")).unwrap();
    }

    let store = FileStore::open(dir.path()).unwrap();
    let svc = CartService::open(store, ShopConfig::default());
    assert_eq!(svc.items().len(), 1);
    assert_eq!(svc.items()[0].name, "Shirt");
}

#[test]
fn file_store_checkout_writes_invoice_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let mut svc = CartService::open(store, ShopConfig::default());
    svc.add_item(&product("Shirt", "$78.00")).unwrap();
    svc.checkout().unwrap();

    let raw = std::fs::read_to_string(dir.path().join("invoiceCart.json")).unwrap();
    let snapshot: Vec<LineItem> = serde_json::from_str(&raw).unwrap();
    assert_eq!(snapshot, svc.items());
}

#[test]
fn two_stores_on_one_origin_race_last_writer_wins() {
    let dir = tempfile::tempdir().unwrap();

    let mut tab_a = CartService::open(FileStore::open(dir.path()).unwrap(), ShopConfig::default());
    let mut tab_b = CartService::open(FileStore::open(dir.path()).unwrap(), ShopConfig::default());

    tab_a.add_item(&product("Shirt", "$78.00")).unwrap();
    tab_b.add_item(&product("Shoes", "$120.00")).unwrap();

    // No coordination between tabs: b's save overwrote a's.
    let fresh = CartService::open(FileStore::open(dir.path()).unwrap(), ShopConfig::default());
    assert_eq!(fresh.items().len(), 1);
    assert_eq!(fresh.items()[0].name, "Shoes");
}

// ── Action layer end to end ─────────────────────────────────────────

#[test]
fn shop_then_cart_page_flow() {
    let mut backend = MemoryStore::new();

    // On the shop page there is no cart table; adds persist silently.
    {
        let svc = CartService::open(backend.clone(), ShopConfig::default());
        let mut widget = CartWidget::new(svc, Surface::default());
        widget.dispatch(Action::Add(product("Shirt", "$78.00"))).unwrap();
        let outcome = widget.dispatch(Action::Add(product("Shirt", "$78.00"))).unwrap();
        assert_eq!(outcome.table, None);
        backend = widget.service().store().backend().clone();
    }

    // The cart page picks the same slot up and renders it.
    let svc = CartService::open(backend, ShopConfig::default());
    let mut widget = CartWidget::new(svc, Surface::cart_page());
    let table = widget.render().unwrap();
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].quantity, 2);
    assert_eq!(table.subtotal_cell, "$156.00");

    // Edit, remove, check out.
    widget
        .dispatch(Action::SetQuantity { index: 0, value: "1".into() })
        .unwrap();
    let outcome = widget.dispatch(Action::Checkout).unwrap();
    assert_eq!(outcome.navigate.as_deref(), Some("invoice.html"));

    let store = CartStore::new(widget.service().store().backend().clone());
    assert_eq!(store.load_cart(), widget.service().items());
}

#[test]
fn unknown_tags_never_reach_dispatch() {
    assert_eq!(Action::from_row_tag("navbar", 0, "active"), None);
    assert_eq!(Action::from_page_tag("add", ""), None);
}
