use crate::catalog::Product;

/// A user gesture translated to its semantic action.
///
/// The original discriminated document-wide click and input events by class
/// names and button text ("Apply", "Proceed to checkout"). Here every
/// interactive element carries one of the tag strings below and dispatch is
/// a plain match on the parsed action — see
/// [`CartWidget::dispatch`](crate::widget::CartWidget::dispatch).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Add-to-cart button on a product card.
    Add(Product),
    /// Edit of a row's quantity field; `value` is the raw field text.
    SetQuantity { index: usize, value: String },
    /// Click on a row's remove affordance.
    Remove { index: usize },
    /// The coupon Apply button; `code` is the raw field text.
    ApplyCoupon { code: String },
    /// The proceed-to-checkout button.
    Checkout,
}

impl Action {
    /// The tag string an element carries for this action kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Action::Add(_) => "add",
            Action::SetQuantity { .. } => "qty",
            Action::Remove { .. } => "remove",
            Action::ApplyCoupon { .. } => "coupon",
            Action::Checkout => "checkout",
        }
    }

    /// Build a row-scoped action from an element's tag attribute, the row
    /// index it was stamped with, and the element's current value.
    ///
    /// Unknown tags yield `None` and the event is ignored, like a click that
    /// hits nothing interactive.
    pub fn from_row_tag(tag: &str, index: usize, value: &str) -> Option<Action> {
        match tag {
            "qty" => Some(Action::SetQuantity {
                index,
                value: value.to_string(),
            }),
            "remove" => Some(Action::Remove { index }),
            _ => None,
        }
    }

    /// Build a page-scoped action from an element's tag attribute and the
    /// associated input value (the coupon field's text; empty for checkout).
    pub fn from_page_tag(tag: &str, value: &str) -> Option<Action> {
        match tag {
            "coupon" => Some(Action::ApplyCoupon {
                code: value.to_string(),
            }),
            "checkout" => Some(Action::Checkout),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_tags_parse() {
        assert_eq!(
            Action::from_row_tag("qty", 2, "5"),
            Some(Action::SetQuantity {
                index: 2,
                value: "5".into()
            })
        );
        assert_eq!(
            Action::from_row_tag("remove", 0, ""),
            Some(Action::Remove { index: 0 })
        );
    }

    #[test]
    fn page_tags_parse() {
        assert_eq!(
            Action::from_page_tag("coupon", " save10 "),
            Some(Action::ApplyCoupon {
                code: " save10 ".into()
            })
        );
        assert_eq!(Action::from_page_tag("checkout", ""), Some(Action::Checkout));
    }

    #[test]
    fn unknown_tags_are_ignored() {
        assert_eq!(Action::from_row_tag("zoom", 0, ""), None);
        assert_eq!(Action::from_page_tag("qty", "5"), None);
    }

    #[test]
    fn tags_round_trip() {
        let action = Action::Remove { index: 3 };
        assert_eq!(Action::from_row_tag(action.tag(), 3, ""), Some(action));
        assert_eq!(
            Action::from_page_tag(Action::Checkout.tag(), ""),
            Some(Action::Checkout)
        );
    }
}
