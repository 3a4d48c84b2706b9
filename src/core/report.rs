//! Rolling 30-day spending report.

use chrono::{Duration, NaiveDate};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::store::ExpenseStore;
use crate::domain::Category;

/// Length of the trailing report window in calendar days.
pub const REPORT_WINDOW_DAYS: i64 = 30;

/// Total spent in one category inside the report window.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Aggregated totals for the trailing 30-day window.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub highest_spending_category: Category,
    pub total_spent: f64,
    /// Per-category totals in order of first appearance within the window.
    /// Categories with no qualifying expense are omitted, not zero-filled.
    /// Serializes as a JSON object keyed by category label, entries in the
    /// same first-appearance order.
    #[serde(serialize_with = "totals_as_map")]
    pub category_totals: Vec<CategoryTotal>,
}

fn totals_as_map<S>(totals: &[CategoryTotal], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(totals.len()))?;
    for entry in totals {
        map.serialize_entry(entry.category.as_str(), &entry.total)?;
    }
    map.end()
}

/// Outcome of a monthly report: totals, or an explicit empty state.
#[derive(Debug, Clone, PartialEq)]
pub enum MonthlyReport {
    Empty,
    Summary(MonthlySummary),
}

impl MonthlyReport {
    /// Sentinel rendered by both front ends when nothing qualifies.
    pub const EMPTY_MESSAGE: &'static str = "No expenses recorded for the past month.";

    pub fn summary(&self) -> Option<&MonthlySummary> {
        match self {
            MonthlyReport::Empty => None,
            MonthlyReport::Summary(summary) => Some(summary),
        }
    }
}

/// Stateless aggregation over a snapshot of the store.
pub struct ReportService;

impl ReportService {
    /// Computes totals for expenses dated within `[now - 30 days, now]`,
    /// inclusive on both ends.
    ///
    /// The window is derived once from the single `now` reference, so every
    /// expense is judged against the same bounds. When two categories tie for
    /// the largest total, the one whose first expense appears earliest in the
    /// qualifying subset wins: a later category must be strictly greater to
    /// take the lead.
    pub fn monthly_report(store: &ExpenseStore, now: NaiveDate) -> MonthlyReport {
        let window_start = now - Duration::days(REPORT_WINDOW_DAYS);

        // Single pass; parallel vectors keep first-appearance order, which the
        // tie-break below depends on.
        let mut categories: Vec<Category> = Vec::new();
        let mut totals: Vec<f64> = Vec::new();
        let mut total_spent = 0.0;

        for expense in store.iter() {
            if expense.date < window_start || expense.date > now {
                continue;
            }
            total_spent += expense.amount;
            match categories.iter().position(|c| *c == expense.category) {
                Some(index) => totals[index] += expense.amount,
                None => {
                    categories.push(expense.category);
                    totals.push(expense.amount);
                }
            }
        }

        if categories.is_empty() {
            return MonthlyReport::Empty;
        }

        let mut leader = 0;
        for index in 1..totals.len() {
            if totals[index] > totals[leader] {
                leader = index;
            }
        }

        let category_totals = categories
            .iter()
            .zip(&totals)
            .map(|(category, total)| CategoryTotal {
                category: *category,
                total: *total,
            })
            .collect();

        MonthlyReport::Summary(MonthlySummary {
            highest_spending_category: categories[leader],
            total_spent,
            category_totals,
        })
    }
}
