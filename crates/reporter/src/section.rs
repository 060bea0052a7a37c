use crate::labels::Labels;
use crate::tasks::{Task, TaskKind};
use analytics::StoreReport;
use core_types::{Customer, Product};

/// A renderer-neutral piece of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Line(String),
    Rows {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Everything printed for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub number: u8,
    pub title: String,
    pub blocks: Vec<Block>,
}

/// Turns one task's result into display blocks. This is where sentinel checks live:
/// every `None` in the report becomes the matching "not found" line.
pub fn build_section(task: Task, report: &StoreReport<'_>, labels: &Labels) -> Section {
    let mut blocks = Vec::new();

    match task.kind {
        TaskKind::CustomerDetails => {
            for customer in report.customers {
                customer_blocks(customer, labels, &mut blocks);
            }
            let totals = report.customer_totals;
            blocks.push(line(format!("{}: {:.2}", labels.total_cash, totals.total_cash)));
            blocks.push(line(format!("{}: {:.2}", labels.total_spent, totals.total_spent)));
        }
        TaskKind::TopSpender => optional_customer(report.top_spender, labels, &mut blocks),
        TaskKind::LowestSpender => optional_customer(report.lowest_spender, labels, &mut blocks),
        TaskKind::MostExpensiveProduct => {
            optional_product(report.most_expensive_product, labels, &mut blocks)
        }
        TaskKind::MostSoldProduct => optional_product(report.most_sold_product, labels, &mut blocks),
        TaskKind::AverageProductPrice => match report.average_product_price {
            Some(average) => blocks.push(line(format!(
                "{}: {:.0}",
                labels.average_product_price, average
            ))),
            None => blocks.push(line(labels.product_not_found)),
        },
        TaskKind::LineItemAverage => match report.line_item_average {
            Some(average) => blocks.push(line(format!(
                "{}: {} / {} = {:.3}",
                labels.line_item_average,
                average.total_line_items,
                average.customer_count,
                average.average
            ))),
            None => blocks.push(line(labels.customer_not_found)),
        },
        TaskKind::BestSellingCategory => match report.best_selling_category {
            Some(category) => {
                blocks.push(line(format!("{}: {}", labels.best_selling_category, category)))
            }
            None => blocks.push(line(labels.category_not_found)),
        },
        TaskKind::SoldExtremes => match report.sold_extremes {
            Some(extremes) => {
                blocks.push(line(format!("{}:", labels.most_sold)));
                blocks.push(product_rows(&[extremes.most], labels));
                blocks.push(line(format!("{}:", labels.least_sold)));
                blocks.push(product_rows(&[extremes.least], labels));
            }
            None => blocks.push(line(labels.product_not_found)),
        },
        TaskKind::TopLineItemCustomer => match report.top_line_item_customer {
            Some(top) => {
                customer_blocks(top.customer, labels, &mut blocks);
                blocks.push(line(format!(
                    "{}: {}",
                    labels.total_line_items, top.total_line_items
                )));
            }
            None => blocks.push(line(labels.customer_not_found)),
        },
        TaskKind::AverageSpending => match report.average_spending {
            Some(spending) => {
                blocks.push(line(format!(
                    "{}: {:.2}",
                    labels.average_spending, spending.average
                )));
                blocks.push(line(format!("{}:", labels.top_spending_customer)));
                customer_blocks(spending.top_spender, labels, &mut blocks);
            }
            None => blocks.push(line(labels.customer_not_found)),
        },
        TaskKind::MostProfitableCategory => match report.most_profitable_category {
            Some(category) => blocks.push(line(format!(
                "{}: {} ({}: {:.2})",
                labels.most_profitable_category,
                category.category,
                labels.total_profit,
                category.amount
            ))),
            None => blocks.push(line(labels.category_not_found)),
        },
        TaskKind::MostExpensivePurchases => {
            if report.most_expensive_purchases.is_empty() {
                blocks.push(line(labels.customer_not_found));
            }
            for purchase in &report.most_expensive_purchases {
                let name = purchase.customer.full_name();
                match purchase.product {
                    Some(product) => {
                        blocks.push(line(format!("{name}: {}", labels.most_expensive_purchase_of)));
                        blocks.push(product_rows(&[product], labels));
                    }
                    None => blocks.push(line(format!("{name}: {}", labels.purchase_not_found))),
                }
            }
        }
        TaskKind::MostExpensiveCategories => {
            if report.most_expensive_categories.is_empty() {
                blocks.push(line(labels.customer_not_found));
            }
            for entry in &report.most_expensive_categories {
                let name = entry.customer.full_name();
                match entry.category {
                    Some(category) => {
                        blocks.push(line(format!(
                            "{name}: {}: {}",
                            labels.most_expensive_category_of, category.category
                        )));
                        blocks.push(line(format!(
                            "{}: {:.2}",
                            labels.amount_in_category, category.amount
                        )));
                    }
                    None => blocks.push(line(format!(
                        "{name}: {}",
                        labels.spending_category_not_found
                    ))),
                }
            }
        }
        TaskKind::SoldQuantities => {
            let sold = &report.sold_quantities;
            if sold.per_product.is_empty() {
                blocks.push(line(labels.sold_products_not_found));
            } else {
                blocks.push(Block::Rows {
                    header: vec![labels.product_name.to_string(), labels.quantity.to_string()],
                    rows: sold
                        .per_product
                        .iter()
                        .map(|entry| {
                            vec![entry.name.to_string(), format!("{} {}", entry.quantity, labels.units)]
                        })
                        .collect(),
                });
                blocks.push(line(format!(
                    "{}: {} {}",
                    labels.total_sold, sold.total, labels.units
                )));
            }
        }
    }

    Section {
        number: task.number,
        title: task.kind.title(labels).to_string(),
        blocks,
    }
}

fn line(text: impl Into<String>) -> Block {
    Block::Line(text.into())
}

fn optional_customer(customer: Option<&Customer>, labels: &Labels, blocks: &mut Vec<Block>) {
    match customer {
        Some(customer) => customer_blocks(customer, labels, blocks),
        None => blocks.push(line(labels.customer_not_found)),
    }
}

fn optional_product(product: Option<&Product>, labels: &Labels, blocks: &mut Vec<Block>) {
    match product {
        Some(product) => blocks.push(product_rows(&[product], labels)),
        None => blocks.push(line(labels.product_not_found)),
    }
}

fn customer_blocks(customer: &Customer, labels: &Labels, blocks: &mut Vec<Block>) {
    blocks.push(line(format!(
        "{}: {}, {}: {}, {}: {:.2}",
        labels.first_name,
        customer.first_name,
        labels.last_name,
        customer.last_name,
        labels.cash,
        customer.cash
    )));
    if !customer.basket.products.is_empty() {
        let products: Vec<&Product> = customer.basket.products.iter().collect();
        blocks.push(product_rows(&products, labels));
    }
    blocks.push(line(format!(
        "{}: {:.2}",
        labels.basket_total, customer.basket.total
    )));
}

fn product_rows(products: &[&Product], labels: &Labels) -> Block {
    Block::Rows {
        header: vec![
            labels.category.to_string(),
            labels.product_name.to_string(),
            labels.price.to_string(),
            labels.quantity.to_string(),
        ],
        rows: products
            .iter()
            .map(|product| {
                vec![
                    product.category.clone(),
                    product.name.clone(),
                    format!("{:.2}", product.price),
                    product.quantity.to_string(),
                ]
            })
            .collect(),
    }
}
