//! HTTP front end exposing the core operations as a small JSON API.
//!
//! Thin wrappers only: handlers parse transport input, call the core, and map
//! [`ValidationError`] to a 400 response. Payloads follow the
//! `{status, data}` / `{status, error}` shape.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::core::{
    ExpenseFilter, ExpenseStore, MonthlyReport, QueryService, ReportService, Validator,
};
use crate::errors::ValidationError;

const WELCOME_MESSAGE: &str = "Welcome to the Personal Expense Tracker API!";
const ADDED_MESSAGE: &str = "Expense added successfully.";

/// Shared handler state guarding the store for concurrent access.
///
/// The core itself is single-threaded; the mutex restores the one-operation-
/// at-a-time discipline inside a multi-threaded host.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<Mutex<ExpenseStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Builds the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/expenses", post(add_expense).get(list_expenses))
        .route("/expenses/monthly-report", get(monthly_report))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener and serves the API until the process ends.
pub async fn serve(addr: std::net::SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");
    axum::serve(listener, router(state)).await
}

#[derive(Debug, Deserialize)]
pub struct NewExpense {
    pub category: String,
    pub amount: f64,
    pub date: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseQuery {
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Serialize)]
struct SuccessBody<T> {
    status: &'static str,
    data: T,
}

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    error: String,
}

fn success<T: Serialize>(data: T) -> Response {
    (
        StatusCode::OK,
        Json(SuccessBody {
            status: "success",
            data,
        }),
    )
        .into_response()
}

fn rejection(error: ValidationError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            status: "error",
            error: error.to_string(),
        }),
    )
        .into_response()
}

fn store_unavailable() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Expense store unavailable").into_response()
}

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

async fn add_expense(State(state): State<AppState>, Json(body): Json<NewExpense>) -> Response {
    info!("POST /expenses - category: {}", body.category);

    match Validator::validate(&body.category, body.amount, &body.date) {
        Ok(expense) => {
            let Ok(mut store) = state.store.lock() else {
                return store_unavailable();
            };
            store.append(expense);
            success(ADDED_MESSAGE)
        }
        Err(error) => rejection(error),
    }
}

async fn list_expenses(
    State(state): State<AppState>,
    Query(query): Query<ExpenseQuery>,
) -> Response {
    info!("GET /expenses - query: {:?}", query);

    let filter = match build_filter(&query) {
        Ok(filter) => filter,
        Err(error) => return rejection(error),
    };
    let Ok(store) = state.store.lock() else {
        return store_unavailable();
    };
    success(QueryService::query(&store, &filter))
}

async fn monthly_report(State(state): State<AppState>) -> Response {
    info!("GET /expenses/monthly-report");

    // One reference instant for the whole computation.
    let now = Utc::now().date_naive();
    let Ok(store) = state.store.lock() else {
        return store_unavailable();
    };
    match ReportService::monthly_report(&store, now) {
        MonthlyReport::Empty => success(MonthlyReport::EMPTY_MESSAGE),
        MonthlyReport::Summary(summary) => success(summary),
    }
}

fn build_filter(query: &ExpenseQuery) -> Result<ExpenseFilter, ValidationError> {
    let mut filter = ExpenseFilter::new();
    if let Some(raw) = query.category.as_deref() {
        filter = filter.with_category(raw.parse()?);
    }
    if let Some(raw) = query.start_date.as_deref() {
        filter = filter.from_date(Validator::parse_date(raw)?);
    }
    if let Some(raw) = query.end_date.as_deref() {
        filter = filter.until_date(Validator::parse_date(raw)?);
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(category: &str, amount: f64, date: &str) -> Json<NewExpense> {
        Json(NewExpense {
            category: category.into(),
            amount,
            date: date.into(),
        })
    }

    #[tokio::test]
    async fn add_expense_accepts_valid_input() {
        let state = AppState::new();
        let response = add_expense(State(state.clone()), request("Food", 9.99, "2024-05-01")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.store.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn add_expense_rejects_bad_category() {
        let state = AppState::new();
        let response = add_expense(State(state.clone()), request("Rent", 9.99, "2024-05-01")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.store.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_expenses_rejects_malformed_filter_dates() {
        let state = AppState::new();
        let query = ExpenseQuery {
            category: None,
            start_date: Some("last tuesday".into()),
            end_date: None,
        };
        let response = list_expenses(State(state), Query(query)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_expenses_filters_by_category() {
        let state = AppState::new();
        add_expense(State(state.clone()), request("Food", 5.0, "2024-05-01")).await;
        add_expense(State(state.clone()), request("Bills", 30.0, "2024-05-02")).await;

        let query = ExpenseQuery {
            category: Some("Bills".into()),
            start_date: None,
            end_date: None,
        };
        let response = list_expenses(State(state), Query(query)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn monthly_report_handles_an_empty_store() {
        let state = AppState::new();
        let response = monthly_report(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
