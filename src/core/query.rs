//! Category and date-range filtering over the store.

use chrono::NaiveDate;

use crate::core::store::ExpenseStore;
use crate::domain::{Category, Expense};

/// Optional filters combined with logical AND.
///
/// An absent field imposes no constraint; both date bounds are inclusive and
/// compared over normalized calendar dates only.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExpenseFilter {
    pub category: Option<Category>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn from_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn until_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// True when the expense satisfies every provided bound.
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = self.category {
            if expense.category != category {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }
        true
    }
}

/// Filters the store's contents without reordering them.
pub struct QueryService;

impl QueryService {
    /// Returns every stored expense matching `filter`, in insertion order.
    ///
    /// An empty result is a valid outcome, not an error.
    pub fn query(store: &ExpenseStore, filter: &ExpenseFilter) -> Vec<Expense> {
        store
            .iter()
            .filter(|expense| filter.matches(expense))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Validator;

    fn seeded_store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        for (category, amount, date) in [
            ("Food", 10.0, "2024-01-05"),
            ("Bills", 80.0, "2024-01-15"),
            ("Food", 7.5, "2024-02-02"),
            ("Bills", 40.0, "2024-02-20"),
            ("Travel", 120.0, "2024-01-31"),
        ] {
            store.append(Validator::validate(category, amount, date).unwrap());
        }
        store
    }

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn no_filters_returns_everything_in_order() {
        let store = seeded_store();
        let result = QueryService::query(&store, &ExpenseFilter::new());
        assert_eq!(result, store.all());
    }

    #[test]
    fn category_filter_keeps_every_matching_row() {
        let store = seeded_store();
        let filter = ExpenseFilter::new().with_category(Category::Bills);
        let result = QueryService::query(&store, &filter);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.category == Category::Bills));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let store = seeded_store();
        let filter = ExpenseFilter::new()
            .from_date(day(2024, 1, 15))
            .until_date(day(2024, 1, 31));
        let amounts: Vec<f64> = QueryService::query(&store, &filter)
            .iter()
            .map(|e| e.amount)
            .collect();
        // Both boundary days qualify.
        assert_eq!(amounts, vec![80.0, 120.0]);
    }

    #[test]
    fn category_and_range_compose_with_and() {
        let store = seeded_store();
        let filter = ExpenseFilter::new()
            .with_category(Category::Bills)
            .from_date(day(2024, 1, 1))
            .until_date(day(2024, 1, 31));
        let result = QueryService::query(&store, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].amount, 80.0);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let store = seeded_store();
        let filter = ExpenseFilter::new().with_category(Category::Shopping);
        assert!(QueryService::query(&store, &filter).is_empty());
    }
}
