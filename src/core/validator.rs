//! Validation rules for candidate expenses.

use chrono::{DateTime, NaiveDate};

use crate::domain::{Category, Expense};
use crate::errors::ValidationError;

/// Checks raw expense fields against the domain rules.
pub struct Validator;

impl Validator {
    /// Validates raw inputs and returns the accepted expense record.
    ///
    /// Rules run in a fixed order and stop at the first failure: category
    /// membership, then amount positivity, then date parsing. Pure function
    /// of its inputs.
    pub fn validate(category: &str, amount: f64, date: &str) -> Result<Expense, ValidationError> {
        let category: Category = category.parse()?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }
        let date = Self::parse_date(date)?;
        Ok(Expense::new(category, amount, date))
    }

    /// Parses an externally supplied date into a normalized calendar date.
    ///
    /// Accepts plain `YYYY-MM-DD`, falling back to a full RFC 3339 timestamp
    /// normalized to its UTC calendar day. Day granularity only.
    pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
        let trimmed = raw.trim();
        if let Ok(date) = trimmed.parse::<NaiveDate>() {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(trimmed)
            .map(|datetime| datetime.naive_utc().date())
            .map_err(|_| ValidationError::InvalidDate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_expense() {
        let expense = Validator::validate("Food", 12.5, "2024-03-01").unwrap();
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.amount, 12.5);
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn unknown_category_wins_over_other_failures() {
        // Amount and date are both bad too; the category rule fires first.
        let err = Validator::validate("Rent", -1.0, "not-a-date").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCategory);
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        for amount in [0.0, -0.01, -100.0, f64::NAN, f64::INFINITY] {
            let err = Validator::validate("Bills", amount, "2024-03-01").unwrap_err();
            assert_eq!(err, ValidationError::InvalidAmount);
        }
    }

    #[test]
    fn amount_rule_fires_before_date_rule() {
        let err = Validator::validate("Bills", 0.0, "not-a-date").unwrap_err();
        assert_eq!(err, ValidationError::InvalidAmount);
    }

    #[test]
    fn unparseable_dates_are_rejected() {
        for raw in ["", "yesterday", "2024-13-01", "01/02/2024"] {
            let err = Validator::validate("Travel", 5.0, raw).unwrap_err();
            assert_eq!(err, ValidationError::InvalidDate);
        }
    }

    #[test]
    fn rfc3339_timestamps_normalize_to_the_utc_day() {
        let expense = Validator::validate("Other", 1.0, "2024-06-14T23:30:00-04:00").unwrap();
        // 23:30 UTC-4 is already June 15th in UTC.
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }
}
