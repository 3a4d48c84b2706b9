//! The expense record itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// An immutable record of one spending event.
///
/// Constructed only through [`crate::core::Validator::validate`], so every
/// stored instance already satisfies the domain rules: category from the
/// closed set, strictly positive amount, normalized calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub category: Category,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Expense {
    pub(crate) fn new(category: Category, amount: f64, date: NaiveDate) -> Self {
        Self {
            category,
            amount,
            date,
        }
    }
}
