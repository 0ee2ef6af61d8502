use serde::{Deserialize, Serialize};

/// One product row in the cart.
///
/// The wire field names (`name`/`price`/`img`/`quantity`) match the format
/// the original site wrote to localStorage, so carts persisted by it load
/// unchanged. `name` is the unique key within a cart: adding the same name
/// twice bumps the existing row's quantity instead of appending.
///
/// `quantity` is signed on purpose. The default quantity policy stores the
/// parsed field value verbatim, zero and negatives included; see
/// [`QuantityPolicy`](crate::config::QuantityPolicy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    #[serde(rename = "img")]
    pub image: String,
    pub quantity: i64,
}

impl LineItem {
    /// Unit price × quantity for this row.
    pub fn line_subtotal(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LineItem {
        LineItem {
            name: "Cartoon Astronaut T-Shirt".into(),
            unit_price: 78.0,
            image: "img/products/f1.jpg".into(),
            quantity: 2,
        }
    }

    #[test]
    fn line_subtotal_multiplies() {
        assert_eq!(sample().line_subtotal(), 156.0);
    }

    #[test]
    fn wire_format_uses_original_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "Cartoon Astronaut T-Shirt");
        assert_eq!(json["price"], 78.0);
        assert_eq!(json["img"], "img/products/f1.jpg");
        assert_eq!(json["quantity"], 2);
    }

    #[test]
    fn loads_original_site_format() {
        let json = r#"{"name":"Shirt","price":49.5,"img":"f2.jpg","quantity":3}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "Shirt");
        assert_eq!(item.unit_price, 49.5);
        assert_eq!(item.image, "f2.jpg");
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn negative_quantity_is_representable() {
        // The verbatim policy can store anything the field parsed to.
        let item = LineItem { quantity: -2, ..sample() };
        assert_eq!(item.line_subtotal(), -156.0);
    }
}
