pub mod query;
pub mod report;
pub mod store;
pub mod validator;

pub use query::{ExpenseFilter, QueryService};
pub use report::{CategoryTotal, MonthlyReport, MonthlySummary, ReportService};
pub use store::ExpenseStore;
pub use validator::Validator;
