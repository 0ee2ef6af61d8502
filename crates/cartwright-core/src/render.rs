use crate::item::LineItem;
use crate::totals::{format_money, Totals};

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Positional index carried by the row's remove affordance and quantity
    /// field, the way the original stamped them with `data-index`.
    pub index: usize,
    pub image: String,
    pub name: String,
    /// Unit price formatted for display (`$78.00`).
    pub unit_price: String,
    /// Current quantity, pre-filling the editable field.
    pub quantity: i64,
    /// Unit price × quantity, formatted.
    pub line_subtotal: String,
}

/// The cart table plus the two fixed summary cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub subtotal_cell: String,
    pub total_cell: String,
}

/// Project the cart onto a table.
///
/// Pure and idempotent: the view is rebuilt from scratch on every call,
/// never patched, so repeated renders of the same cart are identical. The
/// summary cells come from `totals` — discount 0 for ordinary renders,
/// the coupon's discount for the render that follows a successful apply
/// (see [`CartWidget::dispatch`](crate::widget::CartWidget::dispatch)).
pub fn render_table(items: &[LineItem], totals: &Totals, currency: &str) -> TableView {
    let rows = items
        .iter()
        .enumerate()
        .map(|(index, item)| TableRow {
            index,
            image: item.image.clone(),
            name: item.name.clone(),
            unit_price: format_money(item.unit_price, currency),
            quantity: item.quantity,
            line_subtotal: format_money(item.line_subtotal(), currency),
        })
        .collect();
    TableView {
        rows,
        subtotal_cell: format_money(totals.subtotal, currency),
        total_cell: format_money(totals.total, currency),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64, quantity: i64) -> LineItem {
        LineItem {
            name: name.into(),
            unit_price: price,
            image: format!("img/{name}.jpg"),
            quantity,
        }
    }

    #[test]
    fn rows_carry_position_and_formatted_cells() {
        let items = [item("Shirt", 78.0, 2), item("Shoes", 120.0, 1)];
        let totals = Totals::compute(&items, 0, 10.0);
        let view = render_table(&items, &totals, "$");

        assert_eq!(view.rows.len(), 2);
        let row = &view.rows[0];
        assert_eq!(row.index, 0);
        assert_eq!(row.name, "Shirt");
        assert_eq!(row.image, "img/Shirt.jpg");
        assert_eq!(row.unit_price, "$78.00");
        assert_eq!(row.quantity, 2);
        assert_eq!(row.line_subtotal, "$156.00");
        assert_eq!(view.rows[1].index, 1);
    }

    #[test]
    fn summary_cells_show_subtotal_and_total() {
        let items = [item("a", 10.0, 2), item("b", 5.0, 1)];
        let totals = Totals::compute(&items, 0, 10.0);
        let view = render_table(&items, &totals, "$");
        assert_eq!(view.subtotal_cell, "$25.00");
        assert_eq!(view.total_cell, "$35.00");
    }

    #[test]
    fn discounted_totals_flow_into_summary() {
        let items = [item("a", 10.0, 2), item("b", 5.0, 1)];
        let totals = Totals::compute(&items, 10, 10.0);
        let view = render_table(&items, &totals, "$");
        assert_eq!(view.subtotal_cell, "$25.00");
        assert_eq!(view.total_cell, "$32.50");
    }

    #[test]
    fn empty_cart_renders_empty_table() {
        let totals = Totals::compute(&[], 0, 10.0);
        let view = render_table(&[], &totals, "$");
        assert!(view.rows.is_empty());
        assert_eq!(view.subtotal_cell, "$0.00");
        assert_eq!(view.total_cell, "$0.00");
    }

    #[test]
    fn render_is_idempotent() {
        let items = [item("Shirt", 78.0, 2)];
        let totals = Totals::compute(&items, 0, 10.0);
        assert_eq!(
            render_table(&items, &totals, "$"),
            render_table(&items, &totals, "$")
        );
    }
}
