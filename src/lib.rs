#![doc(test(attr(deny(warnings))))]

//! Expense Tracker offers the validation, filtering, and reporting primitives
//! behind a small personal expense tracker, plus the thin HTTP and terminal
//! front ends that drive them.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("expense_tracker=info".parse().unwrap());
        fmt().with_env_filter(filter).init();

        tracing::info!("Expense Tracker tracing initialized.");
    });
}
