use core_types::Customer;
use rust_decimal::Decimal;

/// A basket whose stored total differs from `Σ price * quantity` over its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalMismatch {
    pub customer_id: String,
    pub basket_id: String,
    /// Units across the basket's line items, for context in the warning.
    pub units: u64,
    pub stored: Decimal,
    /// `None` when the recomputed total overflows.
    pub recomputed: Option<Decimal>,
}

/// Compares every stored basket total with the one implied by its line items.
///
/// Diagnostic only: spend queries keep using the stored totals. Each mismatch is logged
/// as a warning.
pub fn audit_basket_totals(customers: &[Customer]) -> Vec<TotalMismatch> {
    let mismatches: Vec<TotalMismatch> = customers
        .iter()
        .filter_map(|customer| {
            let recomputed = customer.basket.recomputed_total();
            if recomputed == Some(customer.basket.total) {
                return None;
            }
            tracing::warn!(
                customer = %customer.id,
                basket = %customer.basket.id,
                units = customer.basket.unit_count(),
                stored = %customer.basket.total,
                recomputed = ?recomputed,
                "Stored basket total does not match its line items."
            );
            Some(TotalMismatch {
                customer_id: customer.id.clone(),
                basket_id: customer.basket.id.clone(),
                units: customer.basket.unit_count(),
                stored: customer.basket.total,
                recomputed,
            })
        })
        .collect();

    tracing::debug!(
        baskets = customers.len(),
        mismatches = mismatches.len(),
        "Basket total audit finished."
    );
    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Basket, Product};
    use rust_decimal_macros::dec;

    fn customer(id: &str, total: Decimal) -> Customer {
        Customer {
            id: id.to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            cash: dec!(0),
            basket: Basket {
                id: format!("b-{id}"),
                products: vec![Product {
                    id: "p1".to_string(),
                    category: "Food".to_string(),
                    name: "Bread".to_string(),
                    price: dec!(1.25),
                    quantity: 4,
                }],
                total,
            },
        }
    }

    #[test]
    fn flags_only_inconsistent_baskets() {
        let customers = vec![customer("ok", dec!(5.00)), customer("off", dec!(6))];

        let mismatches = audit_basket_totals(&customers);

        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].customer_id, "off");
        assert_eq!(mismatches[0].units, 4);
        assert_eq!(mismatches[0].recomputed, Some(dec!(5)));
    }
}
