//! Core projection engine for yearly lifetime projections

use serde::{Deserialize, Serialize};

use crate::answers::Answers;
use crate::assumptions::Assumptions;
use crate::random::RandomSource;
use super::adjustments::{apply_life_events, AdjustmentContext, YearlyFlows};
use super::expense::simulate_expenses;
use super::income::simulate_income;
use super::result::ProjectionResult;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Last simulated age (inclusive)
    pub last_age: u32,

    /// Age at which working income switches to pension
    pub retirement_age: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            last_age: 90,
            retirement_age: 65,
        }
    }
}

/// Whether a result is a live preview or the questionnaire's final answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    Preview,
    Final,
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Number of simulated years for someone aged `age`
    pub fn horizon(&self, age: u32) -> usize {
        if age > self.config.last_age {
            0
        } else {
            (self.config.last_age - age + 1) as usize
        }
    }

    /// Run a full projection for a set of answers
    ///
    /// Draw order is income, expenses, then life events, so a seeded source
    /// reproduces the same result.
    pub fn calculate_results<R: RandomSource + ?Sized>(
        &self,
        answers: &Answers,
        mode: CalculationMode,
        rng: &mut R,
    ) -> ProjectionResult {
        let age = answers.age;
        let horizon = self.horizon(age);

        let income = simulate_income(
            &self.assumptions,
            age,
            answers.annual_income,
            self.config.retirement_age,
            self.config.last_age,
            rng,
        );
        let expense = simulate_expenses(&self.assumptions, age, self.config.last_age, rng);

        // The pension phase repeats the retirement age, so the last sample
        // lands past the final simulated year
        let mut flows = YearlyFlows {
            income: income.incomes,
            expense,
        };
        flows.income.truncate(horizon);
        let base = flows.clone();

        let ctx = AdjustmentContext {
            answers,
            costs: &self.assumptions.life_events,
            retirement_age: self.config.retirement_age,
            average_working_income: income.average_working_income,
        };
        let life_events = apply_life_events(&ctx, &mut flows, rng);

        let result = ProjectionResult::from_flows(
            age,
            base,
            flows,
            income.average_working_income,
            life_events,
            mode,
        );

        log::debug!(
            "{:?} projection from age {}: {} years, final assets {}, peak {}",
            mode,
            age,
            result.years(),
            result.final_assets(),
            result.total_savings
        );

        result
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(Assumptions::default_plan(), ProjectionConfig::default())
    }
}
