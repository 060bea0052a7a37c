use core_types::{Customer, Product};
use rust_decimal::Decimal;
use serde::Serialize;

/// Sums of cash balances and stored basket totals over all customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CustomerTotals {
    pub total_cash: Decimal,
    pub total_spent: Decimal,
}

/// Mean basket total, bundled with the top spender for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AverageSpending<'a> {
    pub average: Decimal,
    pub top_spender: &'a Customer,
}

/// The line items with the highest and lowest quantity, from one `max`-then-`else`-`min` pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoldExtremes<'a> {
    pub most: &'a Product,
    pub least: &'a Product,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CustomerPurchase<'a> {
    pub customer: &'a Customer,
    /// `None` when the customer's basket is empty.
    pub product: Option<&'a Product>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NameQuantity<'a> {
    pub name: &'a str,
    pub quantity: u64,
}

/// Units sold per product name (first-seen order) and the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SoldQuantities<'a> {
    pub per_product: Vec<NameQuantity<'a>>,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryAmount<'a> {
    pub category: &'a str,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CustomerCategory<'a> {
    pub customer: &'a Customer,
    /// `None` when no category's spend is strictly positive.
    pub category: Option<CategoryAmount<'a>>,
}

/// Line items per customer. `total_line_items` counts entries, not units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineItemAverage {
    pub total_line_items: usize,
    pub customer_count: usize,
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TopLineItemCustomer<'a> {
    pub customer: &'a Customer,
    /// Line items summed across every customer, not just the winner.
    pub total_line_items: usize,
}

/// Every query result for one dataset.
///
/// This struct is the final output of `AnalyticsEngine::summarize` and the only thing the
/// reporter sees. Fields that have no meaning for an empty dataset are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreReport<'a> {
    pub customers: &'a [Customer],
    pub customer_totals: CustomerTotals,
    pub top_spender: Option<&'a Customer>,
    pub lowest_spender: Option<&'a Customer>,
    pub average_spending: Option<AverageSpending<'a>>,

    pub most_expensive_product: Option<&'a Product>,
    pub average_product_price: Option<Decimal>,
    pub most_expensive_purchases: Vec<CustomerPurchase<'a>>,
    pub sold_extremes: Option<SoldExtremes<'a>>,
    pub most_sold_product: Option<&'a Product>,
    pub sold_quantities: SoldQuantities<'a>,

    pub best_selling_category: Option<&'a str>,
    pub most_profitable_category: Option<CategoryAmount<'a>>,
    pub most_expensive_categories: Vec<CustomerCategory<'a>>,

    pub line_item_average: Option<LineItemAverage>,
    pub top_line_item_customer: Option<TopLineItemCustomer<'a>>,
}
