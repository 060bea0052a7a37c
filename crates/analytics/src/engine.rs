use crate::error::AnalyticsError;
use crate::grouping::FirstSeenTotals;
use crate::report::{
    AverageSpending, CategoryAmount, CustomerCategory, CustomerPurchase, CustomerTotals,
    LineItemAverage, NameQuantity, SoldExtremes, SoldQuantities, StoreReport, TopLineItemCustomer,
};
use core_types::{Customer, NonEmpty, Product};
use rust_decimal::Decimal;

/// A stateless calculator for deriving store metrics from customer purchase records.
///
/// Every query is a pure read over borrowed records. Results point back into the input,
/// so nothing is cloned and ties always resolve to the first record in input order.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point: runs every query over `customers`.
    ///
    /// # Arguments
    ///
    /// * `customers` - All customer records of one dataset, in input order.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `StoreReport` or an `AnalyticsError` if a money sum
    /// overflows. Averages are only computed when their input is non-empty.
    #[tracing::instrument(name = "analytics_summarize", skip_all, fields(customers = customers.len()))]
    pub fn summarize<'a>(&self, customers: &'a [Customer]) -> Result<StoreReport<'a>, AnalyticsError> {
        let products = self.flatten_products(customers);
        tracing::debug!(line_items = products.len(), "Flattened all baskets.");

        let average_spending = NonEmpty::new(customers)
            .map(|customers| self.average_spending(customers))
            .transpose()?;
        let average_product_price = NonEmpty::new(&products)
            .map(|products| self.average_price(products))
            .transpose()?;
        let line_item_average =
            NonEmpty::new(customers).map(|customers| self.line_item_average(customers));

        let report = StoreReport {
            customers,
            customer_totals: self.customer_totals(customers)?,
            top_spender: self.top_spender(customers),
            lowest_spender: self.lowest_spender(customers),
            average_spending,
            most_expensive_product: self.most_expensive_product(&products),
            average_product_price,
            most_expensive_purchases: self.most_expensive_purchases(customers),
            sold_extremes: self.sold_extremes(customers),
            most_sold_product: self.most_sold_product(&products),
            sold_quantities: self.sold_quantities(&products),
            best_selling_category: self.best_selling_category(customers),
            most_profitable_category: self.most_profitable_category(customers)?,
            most_expensive_categories: self.most_expensive_categories(customers)?,
            line_item_average,
            top_line_item_customer: self.top_line_item_customer(customers),
        };

        tracing::debug!(
            best_selling_category = ?report.best_selling_category,
            total_units = report.sold_quantities.total,
            "Analytics complete."
        );
        Ok(report)
    }

    // --- Shared primitives ---

    /// Every basket's line items, customer order first, then item order. No deduplication.
    pub fn flatten_products<'a>(&self, customers: &'a [Customer]) -> Vec<&'a Product> {
        customers
            .iter()
            .flat_map(|customer| customer.basket.products.iter())
            .collect()
    }

    /// The first product whose identifier equals `id`. An empty `id` never matches.
    pub fn find_by_id<'a>(&self, products: &[&'a Product], id: &str) -> Option<&'a Product> {
        if id.is_empty() {
            return None;
        }
        products.iter().copied().find(|product| product.id == id)
    }

    // --- Spend queries ---

    /// Sums of `cash` and stored basket totals. Both are zero for an empty dataset.
    pub fn customer_totals(&self, customers: &[Customer]) -> Result<CustomerTotals, AnalyticsError> {
        Ok(CustomerTotals {
            total_cash: checked_sum(customers.iter().map(|c| c.cash), "total_cash")?,
            total_spent: checked_sum(customers.iter().map(|c| c.basket.total), "total_spent")?,
        })
    }

    pub fn top_spender<'a>(&self, customers: &'a [Customer]) -> Option<&'a Customer> {
        find_extreme(customers, |candidate, best| {
            candidate.basket.total > best.basket.total
        })
    }

    pub fn lowest_spender<'a>(&self, customers: &'a [Customer]) -> Option<&'a Customer> {
        find_extreme(customers, |candidate, best| {
            candidate.basket.total < best.basket.total
        })
    }

    /// Mean stored basket total, plus the top spender for display.
    pub fn average_spending<'a>(
        &self,
        customers: NonEmpty<'a, Customer>,
    ) -> Result<AverageSpending<'a>, AnalyticsError> {
        let total = checked_sum(customers.iter().map(|c| c.basket.total), "average_spending")?;
        let average = total
            .checked_div(Decimal::from(customers.len()))
            .ok_or(AnalyticsError::Overflow("average_spending"))?;

        let top_spender = self
            .top_spender(customers.as_slice())
            .unwrap_or_else(|| customers.head());

        Ok(AverageSpending {
            average,
            top_spender,
        })
    }

    // --- Product queries ---

    pub fn most_expensive_product<'a>(&self, products: &[&'a Product]) -> Option<&'a Product> {
        find_extreme(products.iter().copied(), |candidate, best| {
            candidate.price > best.price
        })
    }

    /// Mean unit price over line items (each line item counts once, whatever its quantity).
    pub fn average_price(&self, products: NonEmpty<'_, &Product>) -> Result<Decimal, AnalyticsError> {
        let total = checked_sum(products.iter().map(|p| p.price), "average_price")?;
        total
            .checked_div(Decimal::from(products.len()))
            .ok_or(AnalyticsError::Overflow("average_price"))
    }

    /// For each customer, the priciest item in their own basket.
    pub fn most_expensive_purchases<'a>(&self, customers: &'a [Customer]) -> Vec<CustomerPurchase<'a>> {
        customers
            .iter()
            .map(|customer| CustomerPurchase {
                customer,
                product: find_extreme(&customer.basket.products, |candidate, best| {
                    candidate.price > best.price
                }),
            })
            .collect()
    }

    /// Highest and lowest quantity line items in one pass.
    ///
    /// Both sides start at the first line item. A candidate is only tested against the
    /// minimum when it did not replace the maximum.
    pub fn sold_extremes<'a>(&self, customers: &'a [Customer]) -> Option<SoldExtremes<'a>> {
        let products = self.flatten_products(customers);
        let first = *products.first()?;

        let mut most = first;
        let mut least = first;
        for &product in &products {
            if product.quantity > most.quantity {
                most = product;
            } else if product.quantity < least.quantity {
                least = product;
            }
        }

        Some(SoldExtremes { most, least })
    }

    /// The product identifier appearing on the most line items, resolved to its first
    /// line item. Counts entries per identifier; quantities are ignored.
    pub fn most_sold_product<'a>(&self, products: &[&'a Product]) -> Option<&'a Product> {
        let mut counts = FirstSeenTotals::new();
        for &product in products {
            *counts.entry(product.id.as_str(), 0usize) += 1;
        }

        let (id, count) = counts.strict_max_above(0)?;
        tracing::debug!(id, count, "Most sold product by line item count.");
        self.find_by_id(products, id)
    }

    /// Units sold per product *name*. Line items sharing a name but not an identifier
    /// are merged here, unlike in `most_sold_product`.
    pub fn sold_quantities<'a>(&self, products: &[&'a Product]) -> SoldQuantities<'a> {
        let mut per_name = FirstSeenTotals::new();
        let mut total = 0u64;
        for &product in products {
            let quantity = u64::from(product.quantity);
            *per_name.entry(product.name.as_str(), 0u64) += quantity;
            total += quantity;
        }

        SoldQuantities {
            per_product: per_name
                .into_entries()
                .into_iter()
                .map(|(name, quantity)| NameQuantity { name, quantity })
                .collect(),
            total,
        }
    }

    // --- Category queries ---
    //
    // The running maximum starts at zero, so a category whose aggregate is zero or
    // negative never wins, even when it is the only one.

    /// The category with the most units sold across all customers.
    pub fn best_selling_category<'a>(&self, customers: &'a [Customer]) -> Option<&'a str> {
        let mut units = FirstSeenTotals::new();
        for product in self.flatten_products(customers) {
            *units.entry(product.category.as_str(), 0u64) += u64::from(product.quantity);
        }
        units.strict_max_above(0).map(|(category, _)| category)
    }

    /// The category with the highest `Σ price * quantity` across all customers.
    pub fn most_profitable_category<'a>(
        &self,
        customers: &'a [Customer],
    ) -> Result<Option<CategoryAmount<'a>>, AnalyticsError> {
        let spend = category_spend(self.flatten_products(customers), "most_profitable_category")?;
        Ok(spend
            .strict_max_above(Decimal::ZERO)
            .map(|(category, amount)| CategoryAmount { category, amount }))
    }

    /// For each customer, the category they spent the most on within their own basket.
    pub fn most_expensive_categories<'a>(
        &self,
        customers: &'a [Customer],
    ) -> Result<Vec<CustomerCategory<'a>>, AnalyticsError> {
        customers
            .iter()
            .map(|customer| {
                let spend = category_spend(&customer.basket.products, "most_expensive_category")?;
                Ok(CustomerCategory {
                    customer,
                    category: spend
                        .strict_max_above(Decimal::ZERO)
                        .map(|(category, amount)| CategoryAmount { category, amount }),
                })
            })
            .collect()
    }

    // --- Count / average queries ---

    /// Line items (not units) per customer.
    pub fn line_item_average(&self, customers: NonEmpty<'_, Customer>) -> LineItemAverage {
        let total_line_items: usize = customers.iter().map(|c| c.basket.line_item_count()).sum();
        let customer_count = customers.len();

        LineItemAverage {
            total_line_items,
            customer_count,
            average: total_line_items as f64 / customer_count as f64,
        }
    }

    /// The customer with the most line items, plus the line item total across everyone.
    pub fn top_line_item_customer<'a>(&self, customers: &'a [Customer]) -> Option<TopLineItemCustomer<'a>> {
        let customer = find_extreme(customers, |candidate, best| {
            candidate.basket.line_item_count() > best.basket.line_item_count()
        })?;
        let total_line_items = customers.iter().map(|c| c.basket.line_item_count()).sum();

        Some(TopLineItemCustomer {
            customer,
            total_line_items,
        })
    }
}

/// Linear scan keeping the first element unless `prefers(candidate, current)` is strictly
/// true for a later one. `None` for an empty input.
pub fn find_extreme<'a, T, I, F>(items: I, prefers: F) -> Option<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T, &T) -> bool,
{
    let mut items = items.into_iter();
    let mut best = items.next()?;
    for item in items {
        if prefers(item, best) {
            best = item;
        }
    }
    Some(best)
}

fn checked_sum<I>(values: I, metric: &'static str) -> Result<Decimal, AnalyticsError>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value))
        .ok_or(AnalyticsError::Overflow(metric))
}

/// `Σ price * quantity` per category, in first-seen category order.
fn category_spend<'a, I>(
    products: I,
    metric: &'static str,
) -> Result<FirstSeenTotals<'a, Decimal>, AnalyticsError>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut spend = FirstSeenTotals::new();
    for product in products {
        let line_total = product.line_total().ok_or(AnalyticsError::Overflow(metric))?;
        let slot = spend.entry(product.category.as_str(), Decimal::ZERO);
        *slot = slot
            .checked_add(line_total)
            .ok_or(AnalyticsError::Overflow(metric))?;
    }
    Ok(spend)
}
