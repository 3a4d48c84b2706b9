//! Ordered in-memory collection of accepted expenses.

use crate::domain::Expense;

/// Append-only store preserving insertion order for the process lifetime.
///
/// Validation happens before records reach this type; `append` trusts its
/// caller. In a multi-threaded host the store must sit behind a mutual
/// exclusion guard, as the HTTP front end does.
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an already validated expense to the end of the collection.
    pub fn append(&mut self, expense: Expense) {
        tracing::debug!(category = %expense.category, amount = expense.amount, "expense appended");
        self.expenses.push(expense);
    }

    /// Returns a snapshot of the stored expenses in insertion order.
    ///
    /// The copy isolates callers: mutating the returned vector cannot affect
    /// stored state.
    pub fn all(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
