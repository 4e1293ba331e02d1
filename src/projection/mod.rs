//! Lifetime projection: income and expense simulation, life-event
//! adjustments, and the resulting asset trajectory

mod income;
mod expense;
mod adjustments;
mod advice;
mod engine;
mod result;

pub use income::{simulate_income, IncomeProjection};
pub use expense::simulate_expenses;
pub use adjustments::{apply_life_events, AdjustmentContext, LifeEvent, YearlyFlows, PIPELINE_ORDER};
pub use advice::{generate_advice, AdviceKind};
pub use engine::{CalculationMode, ProjectionConfig, ProjectionEngine};
pub use result::{ProjectionResult, YearRow};

/// Round to a whole currency unit, ties to even
pub(crate) fn round_currency(value: f64) -> i64 {
    value.round_ties_even() as i64
}
