use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::item::LineItem;
use crate::totals::parse_price_text;

/// A product as it appears on a shop-page card: display name, the raw text
/// of the price element, and the image source.
///
/// The price stays as text until the moment of adding, because that is what
/// the original read out of the DOM — parsing happens per add, and malformed
/// text becomes a NaN price rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(rename = "price")]
    pub price_text: String,
    pub img: String,
}

impl Product {
    pub fn new(name: impl Into<String>, price_text: impl Into<String>, img: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_text: price_text.into(),
            img: img.into(),
        }
    }

    /// The card's price text parsed to a number (NaN when malformed).
    pub fn unit_price(&self) -> f64 {
        parse_price_text(&self.price_text)
    }

    /// The line item this product becomes when first added to a cart.
    pub fn to_line_item(&self) -> LineItem {
        LineItem {
            name: self.name.clone(),
            unit_price: self.unit_price(),
            image: self.img.clone(),
            quantity: 1,
        }
    }
}

/// The set of products available to add, loaded from a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog file (a JSON array of products).
    pub fn load(path: &Path) -> Result<Self, CartError> {
        let text = fs::read_to_string(path).map_err(|source| CartError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CartError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look up a product by its display name (exact match).
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
