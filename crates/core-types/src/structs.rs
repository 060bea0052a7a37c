use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single line item inside a basket: one product and the number of units bought.
///
/// Product identifiers are only unique within a basket. The same `id` may show up in
/// several customers' baskets, each occurrence being a separate purchase event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub category: String,
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Units sold in this line item.
    pub quantity: u32,
}

impl Product {
    /// `price * quantity` for this line item, or `None` if it does not fit in a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// The ordered line items a customer bought, plus the stored basket total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basket {
    pub id: String,
    #[serde(default)]
    pub products: Vec<Product>,
    /// Stored total. Spend queries trust this value as-is.
    pub total: Decimal,
}

impl Basket {
    /// Number of line items, regardless of their quantities.
    pub fn line_item_count(&self) -> usize {
        self.products.len()
    }

    /// Sum of the `quantity` field over every line item.
    pub fn unit_count(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity)).sum()
    }

    /// The total implied by the line items (`Σ price * quantity`), `None` on overflow.
    pub fn recomputed_total(&self) -> Option<Decimal> {
        self.products
            .iter()
            .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.line_total()?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub cash: Decimal,
    pub basket: Basket,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: &str, price: Decimal, quantity: u32) -> Product {
        Product {
            id: id.to_string(),
            category: "Tools".to_string(),
            name: format!("Item {id}"),
            price,
            quantity,
        }
    }

    #[test]
    fn basket_counts_line_items_and_units_separately() {
        let basket = Basket {
            id: "b1".to_string(),
            products: vec![product("p1", dec!(2.50), 4), product("p2", dec!(10), 1)],
            total: dec!(20),
        };

        assert_eq!(basket.line_item_count(), 2);
        assert_eq!(basket.unit_count(), 5);
        assert_eq!(basket.recomputed_total(), Some(dec!(20.00)));
    }

    #[test]
    fn customer_deserializes_from_numeric_json_fields() {
        let json = r#"{
            "id": "c1",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "cash": 1500.75,
            "basket": {
                "id": "b1",
                "products": [
                    {"id": "p1", "category": "Books", "name": "Notes", "price": 12.5, "quantity": 2}
                ],
                "total": 25.0
            }
        }"#;

        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.full_name(), "Ada Lovelace");
        assert_eq!(customer.cash, dec!(1500.75));
        assert_eq!(customer.basket.products[0].line_total(), Some(dec!(25.0)));
        assert_eq!(customer.basket.total, dec!(25));
    }

    #[test]
    fn missing_product_list_means_empty_basket() {
        let json = r#"{"id": "b1", "total": 0}"#;
        let basket: Basket = serde_json::from_str(json).unwrap();
        assert!(basket.products.is_empty());
    }
}
