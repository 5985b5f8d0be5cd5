//! The datasets shown on the dashboard charts.
//!
//! The charts display fixed example data for the year. Only the transaction
//! list is editable.

/// Income and expenses per month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyData {
    pub labels: Vec<&'static str>,
    pub income: Vec<f64>,
    pub expense: Vec<f64>,
}

impl MonthlyData {
    /// The example income and expenses for each month of the year.
    pub fn example() -> Self {
        Self {
            labels: vec![
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            income: vec![
                8000.0, 9500.0, 7800.0, 10000.0, 8500.0, 9000.0, 11000.0, 9800.0, 10500.0, 8800.0,
                9200.0, 10000.0,
            ],
            expense: vec![
                5500.0, 6200.0, 5800.0, 7000.0, 6000.0, 5500.0, 7200.0, 6800.0, 7000.0, 5900.0,
                6100.0, 7000.0,
            ],
        }
    }

    pub fn total_income(&self) -> f64 {
        self.income.iter().sum()
    }

    pub fn total_expense(&self) -> f64 {
        self.expense.iter().sum()
    }
}

/// Expenses grouped by category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryData {
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
    /// A CSS colour for each category.
    pub colors: Vec<&'static str>,
}

impl CategoryData {
    /// The example expenses for each transaction category.
    pub fn example() -> Self {
        Self {
            labels: vec!["Food", "Health", "Shopping", "Entertainment", "Others"],
            values: vec![978.0, 534.20, 1038.23, 345.03, 276.89],
            colors: vec!["#ff6b6b", "#4ecdc4", "#ffd93d", "#6c5ce7", "#a8a8a8"],
        }
    }

    /// The share of the total for each category, see [category_percentages].
    pub fn percentages(&self) -> Vec<f64> {
        category_percentages(&self.values)
    }
}

/// Calculate each value's percentage of the sum of `values`, rounded to one decimal place.
///
/// Returns all zeros if the values sum to zero.
pub fn category_percentages(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();

    if total == 0.0 {
        return vec![0.0; values.len()];
    }

    values
        .iter()
        .map(|value| (value / total * 1000.0).round() / 10.0)
        .collect()
}
