//! Domain types classifying expenses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// The closed set of labels an expense can be filed under.
///
/// Membership is enforced at parse time; an `Expense` can never hold a label
/// outside this set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Bills,
    Other,
}

impl Category {
    /// Every supported category, in presentation order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Bills,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Exact string match against the closed set; anything else is rejected.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == raw)
            .ok_or(ValidationError::InvalidCategory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_round_trips() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(
            "food".parse::<Category>(),
            Err(ValidationError::InvalidCategory)
        );
        assert_eq!(
            "Groceries".parse::<Category>(),
            Err(ValidationError::InvalidCategory)
        );
    }
}
