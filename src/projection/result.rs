//! Projection output structures

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::adjustments::{LifeEvent, YearlyFlows};
use super::advice::{generate_advice, AdviceKind};
use super::engine::CalculationMode;

/// One simulated year of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub age: u32,
    pub income: i64,
    pub expense: i64,
    pub net: i64,
    /// Assets at the end of the year
    pub assets: i64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Age of the first simulated year
    pub start_age: u32,

    /// Cumulative assets, starting at 0; one entry longer than the series
    pub asset_trajectory: Vec<i64>,

    /// Income per simulated year after life events
    pub income_series: Vec<i64>,

    /// Expense per simulated year after life events
    pub expense_series: Vec<i64>,

    /// Simulated income before life events
    #[serde(default)]
    pub base_income_series: Vec<i64>,

    /// Simulated expense before life events
    #[serde(default)]
    pub base_expense_series: Vec<i64>,

    /// Highest asset balance reached
    pub total_savings: i64,

    /// Mean of income minus expense per year
    pub yearly_savings: f64,

    /// Mean working-year income the pension is based on
    pub average_working_income: f64,

    pub life_events: Vec<LifeEvent>,

    pub advice: String,
    pub advice_kind: AdviceKind,

    pub mode: CalculationMode,
    pub generated_at: NaiveDateTime,
}

impl ProjectionResult {
    /// Aggregate adjusted yearly flows into a result
    ///
    /// `base` is the simulation before life events, kept for comparison.
    pub fn from_flows(
        start_age: u32,
        base: YearlyFlows,
        flows: YearlyFlows,
        average_working_income: f64,
        life_events: Vec<LifeEvent>,
        mode: CalculationMode,
    ) -> Self {
        let YearlyFlows { income, expense } = flows;

        let mut asset_trajectory = Vec::with_capacity(expense.len() + 1);
        asset_trajectory.push(0_i64);
        let mut assets = 0_i64;
        let mut net_total = 0_i64;
        for (inc, exp) in income.iter().zip(&expense) {
            let net = inc - exp;
            assets += net;
            net_total += net;
            asset_trajectory.push(assets);
        }

        let years = asset_trajectory.len() - 1;
        let total_savings = asset_trajectory.iter().copied().max().unwrap_or(0);
        let yearly_savings = if years == 0 {
            0.0
        } else {
            net_total as f64 / years as f64
        };

        let advice_kind = generate_advice(&asset_trajectory, start_age);

        Self {
            start_age,
            asset_trajectory,
            income_series: income,
            expense_series: expense,
            base_income_series: base.income,
            base_expense_series: base.expense,
            total_savings,
            yearly_savings,
            average_working_income,
            life_events,
            advice: advice_kind.to_string(),
            advice_kind,
            mode,
            generated_at: Local::now().naive_local(),
        }
    }

    /// Number of simulated years
    pub fn years(&self) -> usize {
        self.asset_trajectory.len().saturating_sub(1)
    }

    /// Assets at the end of the last simulated year
    pub fn final_assets(&self) -> i64 {
        self.asset_trajectory.last().copied().unwrap_or(0)
    }

    /// Ages aligned with `asset_trajectory`
    pub fn ages(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.asset_trajectory.len() as u32).map(move |offset| self.start_age + offset)
    }

    /// Per-year change from life events, `(income, expense)`
    pub fn life_event_deltas(&self) -> Vec<(i64, i64)> {
        let income = self.income_series.iter().zip(&self.base_income_series);
        let expense = self.expense_series.iter().zip(&self.base_expense_series);
        income
            .zip(expense)
            .map(|((inc, base_inc), (exp, base_exp))| (inc - base_inc, exp - base_exp))
            .collect()
    }

    /// Per-year table
    pub fn yearly_rows(&self) -> Vec<YearRow> {
        self.income_series
            .iter()
            .zip(&self.expense_series)
            .zip(self.asset_trajectory.iter().skip(1))
            .enumerate()
            .map(|(offset, ((&income, &expense), &assets))| YearRow {
                age: self.start_age + offset as u32,
                income,
                expense,
                net: income - expense,
                assets,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn result_for(income: Vec<i64>, expense: Vec<i64>) -> ProjectionResult {
        ProjectionResult::from_flows(
            40,
            YearlyFlows { income: income.clone(), expense: expense.clone() },
            YearlyFlows { income, expense },
            0.0,
            Vec::new(),
            CalculationMode::Preview,
        )
    }

    #[test]
    fn test_trajectory_accumulates() {
        let result = result_for(vec![500, 500, 100], vec![200, 300, 900]);
        assert_eq!(result.asset_trajectory, vec![0, 300, 500, -300]);
        assert_eq!(result.total_savings, 500);
        assert_relative_eq!(result.yearly_savings, -100.0);
        assert_eq!(result.final_assets(), -300);
        assert_eq!(result.advice_kind, AdviceKind::Shortfall);
        assert_eq!(result.advice, AdviceKind::Shortfall.to_string());
    }

    #[test]
    fn test_life_event_deltas() {
        let result = ProjectionResult::from_flows(
            40,
            YearlyFlows { income: vec![500, 500], expense: vec![200, 200] },
            YearlyFlows { income: vec![600, 500], expense: vec![200, 450] },
            0.0,
            vec![LifeEvent::SideIncome],
            CalculationMode::Final,
        );
        assert_eq!(result.base_income_series, vec![500, 500]);
        assert_eq!(result.life_event_deltas(), vec![(100, 0), (0, 250)]);
        assert_eq!(result.final_assets(), 450);
    }

    #[test]
    fn test_total_savings_never_below_seed() {
        let result = result_for(vec![0, 0], vec![10, 10]);
        assert_eq!(result.total_savings, 0);
    }

    #[test]
    fn test_empty_horizon() {
        let result = result_for(Vec::new(), Vec::new());
        assert_eq!(result.asset_trajectory, vec![0]);
        assert_eq!(result.years(), 0);
        assert_eq!(result.yearly_savings, 0.0);
        assert!(result.yearly_rows().is_empty());
    }

    #[test]
    fn test_yearly_rows_align_ages() {
        let result = result_for(vec![500, 500], vec![200, 300]);
        let rows = result.yearly_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], YearRow { age: 41, income: 500, expense: 300, net: 200, assets: 500 });
        assert_eq!(result.ages().collect::<Vec<_>>(), vec![40, 41, 42]);
    }
}
