use crate::labels::Labels;
use configuration::Profile;

/// One printable result of the analytics run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    CustomerDetails,
    TopSpender,
    MostExpensiveProduct,
    AverageProductPrice,
    LineItemAverage,
    LowestSpender,
    BestSellingCategory,
    SoldExtremes,
    TopLineItemCustomer,
    MostSoldProduct,
    AverageSpending,
    MostProfitableCategory,
    MostExpensivePurchases,
    MostExpensiveCategories,
    SoldQuantities,
}

impl TaskKind {
    pub fn title(self, labels: &Labels) -> &'static str {
        match self {
            TaskKind::CustomerDetails => labels.customer_details,
            TaskKind::TopSpender => labels.top_spender,
            TaskKind::MostExpensiveProduct => labels.most_expensive_product,
            TaskKind::AverageProductPrice => labels.average_product_price,
            TaskKind::LineItemAverage => labels.line_item_average,
            TaskKind::LowestSpender => labels.lowest_spender,
            TaskKind::BestSellingCategory => labels.best_selling_category,
            TaskKind::SoldExtremes => labels.sold_extremes,
            TaskKind::TopLineItemCustomer => labels.top_line_item_customer,
            TaskKind::MostSoldProduct => labels.most_sold_product,
            TaskKind::AverageSpending => labels.average_spending,
            TaskKind::MostProfitableCategory => labels.most_profitable_category,
            TaskKind::MostExpensivePurchases => labels.most_expensive_purchases,
            TaskKind::MostExpensiveCategories => labels.most_expensive_categories,
            TaskKind::SoldQuantities => labels.sold_quantities,
        }
    }
}

/// A numbered task as it appears in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub number: u8,
    pub kind: TaskKind,
}

const fn task(number: u8, kind: TaskKind) -> Task {
    Task { number, kind }
}

// Tasks 4 and 8 both print the line item average in the full profile.
const FULL: &[Task] = &[
    task(1, TaskKind::CustomerDetails),
    task(2, TaskKind::TopSpender),
    task(3, TaskKind::MostExpensiveProduct),
    task(4, TaskKind::LineItemAverage),
    task(5, TaskKind::LowestSpender),
    task(6, TaskKind::BestSellingCategory),
    task(7, TaskKind::SoldExtremes),
    task(8, TaskKind::LineItemAverage),
    task(9, TaskKind::TopLineItemCustomer),
    task(10, TaskKind::MostSoldProduct),
    task(11, TaskKind::AverageSpending),
    task(12, TaskKind::MostProfitableCategory),
    task(13, TaskKind::MostExpensivePurchases),
    task(14, TaskKind::MostExpensiveCategories),
    task(15, TaskKind::SoldQuantities),
];

const MAIN_PAGE: &[Task] = &[
    task(1, TaskKind::CustomerDetails),
    task(2, TaskKind::TopSpender),
    task(3, TaskKind::MostExpensiveProduct),
    task(4, TaskKind::AverageProductPrice),
    task(5, TaskKind::LowestSpender),
    task(6, TaskKind::BestSellingCategory),
    task(7, TaskKind::SoldExtremes),
    task(8, TaskKind::LineItemAverage),
    task(9, TaskKind::TopLineItemCustomer),
    task(11, TaskKind::AverageSpending),
    task(12, TaskKind::MostProfitableCategory),
    task(13, TaskKind::MostExpensivePurchases),
    task(14, TaskKind::MostExpensiveCategories),
];

/// The tasks a profile prints, in order. Profiles only choose tasks; every task is
/// computed the same way whichever profile selects it.
pub fn tasks_for(profile: Profile) -> &'static [Task] {
    match profile {
        Profile::Full => FULL,
        Profile::MainPage => MAIN_PAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_profile_numbers_one_to_fifteen() {
        let numbers: Vec<u8> = tasks_for(Profile::Full).iter().map(|t| t.number).collect();
        assert_eq!(numbers, (1..=15).collect::<Vec<u8>>());
    }

    #[test]
    fn main_page_profile_swaps_task_four_and_drops_ten_and_fifteen() {
        let tasks = tasks_for(Profile::MainPage);
        assert_eq!(tasks[3].kind, TaskKind::AverageProductPrice);
        assert!(tasks.iter().all(|t| t.number != 10 && t.number != 15));
    }
}
