//! Plan assumptions: earnings curve, pension, living costs and life events

mod income;
mod expense;
mod life_events;
pub mod loader;

pub use income::{IncomeCurve, IncomeVariation, PensionFormula};
pub use expense::{ExpenseBrackets, ExpenseNoise, ExpenseShock};
pub use life_events::LifeEventCosts;
pub use loader::LoadedAssumptions;

use std::path::Path;

use crate::error::{Error, Result};

/// Container for all projection assumptions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assumptions {
    pub income_curve: IncomeCurve,
    pub income_variation: IncomeVariation,
    pub pension: PensionFormula,
    pub expense_brackets: ExpenseBrackets,
    pub expense_noise: ExpenseNoise,
    pub expense_shock: ExpenseShock,
    pub life_events: LifeEventCosts,
}

impl Assumptions {
    /// Built-in assumptions for a single-person household
    pub fn default_plan() -> Self {
        Self::default()
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    ///
    /// Values not present in the files keep their built-in defaults.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Self::from_loaded(&loaded)
    }

    pub fn from_loaded(loaded: &LoadedAssumptions) -> Result<Self> {
        let mut assumptions = Self::default_plan();

        assumptions.expense_brackets = ExpenseBrackets::from_rows(&loaded.expense_brackets)
            .ok_or_else(|| Error::Assumption("expense_brackets.csv has no rows".to_string()))?;

        for (event, amount) in &loaded.life_event_costs {
            assumptions.set_life_event(event, *amount)?;
        }

        Ok(assumptions)
    }

    fn set_life_event(&mut self, event: &str, amount: f64) -> Result<()> {
        let costs = &mut self.life_events;
        let whole = amount.round() as i64;
        match event {
            "mortgage_annual" => costs.mortgage_annual = whole,
            "marriage_annual" => costs.marriage_annual = whole,
            "dual_income_boost" => costs.dual_income_boost = whole,
            "child_annual" => costs.child_annual = whole,
            "university_annual" => costs.university_annual = whole,
            "family_care_annual" => costs.family_care_annual = whole,
            "side_income_mean" => costs.side_income_mean = amount,
            "side_income_std_dev" => costs.side_income_std_dev = amount,
            "retirement_work_ratio" => costs.retirement_work_ratio = amount,
            other => return Err(Error::Assumption(format!("unknown life event: {other}"))),
        }
        Ok(())
    }
}
