//! Life-event adjustments to simulated income and expenses
//!
//! Events are applied in [`PIPELINE_ORDER`]. All but one add to the series;
//! [`LifeEvent::WorkAfterRetirement`] overwrites income, so it has to run
//! after every additive income event that may touch the same years.

use serde::{Deserialize, Serialize};

use crate::answers::{Answers, WorkingStyle};
use crate::assumptions::LifeEventCosts;
use crate::random::RandomSource;
use super::round_currency;

/// Deterministic life-event rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeEvent {
    Housing,
    Marriage,
    DualIncome,
    Children,
    SideIncome,
    WorkAfterRetirement,
    FamilyCare,
}

pub const PIPELINE_ORDER: [LifeEvent; 7] = [
    LifeEvent::Housing,
    LifeEvent::Marriage,
    LifeEvent::DualIncome,
    LifeEvent::Children,
    LifeEvent::SideIncome,
    LifeEvent::WorkAfterRetirement,
    LifeEvent::FamilyCare,
];

/// Income and expense per simulated year, index 0 = current age
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YearlyFlows {
    pub income: Vec<i64>,
    pub expense: Vec<i64>,
}

/// Inputs shared by every adjustment
#[derive(Debug, Clone, Copy)]
pub struct AdjustmentContext<'a> {
    pub answers: &'a Answers,
    pub costs: &'a LifeEventCosts,
    pub retirement_age: u32,
    pub average_working_income: f64,
}

impl AdjustmentContext<'_> {
    /// Year-index at which `age` is reached, 0 if already past
    fn index_of_age(&self, age: u32) -> usize {
        age.saturating_sub(self.answers.age) as usize
    }
}

impl LifeEvent {
    /// Whether the answers trigger this event
    pub fn applies(&self, answers: &Answers) -> bool {
        match self {
            LifeEvent::Housing => answers.buying_house,
            LifeEvent::Marriage => answers.marriage_age > answers.age,
            LifeEvent::DualIncome => answers.working_style == WorkingStyle::DualIncome,
            LifeEvent::Children => answers.num_children > 0,
            LifeEvent::SideIncome => answers.side_job,
            LifeEvent::WorkAfterRetirement => answers.work_after_retirement,
            LifeEvent::FamilyCare => answers.family_care,
        }
    }

    fn apply<R: RandomSource + ?Sized>(
        &self,
        ctx: &AdjustmentContext<'_>,
        flows: &mut YearlyFlows,
        rng: &mut R,
    ) {
        let costs = ctx.costs;
        let answers = ctx.answers;

        match self {
            LifeEvent::Housing => {
                let start = costs.mortgage_start_offset;
                add_over(&mut flows.expense, start, start + costs.mortgage_years, costs.mortgage_annual);
            }
            LifeEvent::Marriage => {
                let start = ctx.index_of_age(answers.marriage_age);
                add_over(&mut flows.expense, start, usize::MAX, costs.marriage_annual);
            }
            LifeEvent::DualIncome => {
                let end = ctx.index_of_age(ctx.retirement_age);
                add_over(&mut flows.income, 0, end, costs.dual_income_boost);
            }
            LifeEvent::Children => {
                let first_birth = ctx.index_of_age(answers.marriage_age) + costs.first_child_delay;
                for child in 0..answers.num_children as usize {
                    let birth = first_birth + costs.child_spacing * child;
                    if birth >= flows.expense.len() {
                        break;
                    }
                    add_over(&mut flows.expense, birth, birth + costs.child_years, costs.child_annual);
                    if answers.children_university {
                        let start = birth + costs.university_start;
                        add_over(
                            &mut flows.expense,
                            start,
                            start + costs.university_years,
                            costs.university_annual,
                        );
                    }
                }
            }
            LifeEvent::SideIncome => {
                let draw = rng
                    .normal(costs.side_income_mean, costs.side_income_std_dev)
                    .max(0.0);
                let side_income = round_currency(draw);
                log::debug!("Side income drawn at {side_income} per year");
                add_over(&mut flows.income, 0, usize::MAX, side_income);
            }
            LifeEvent::WorkAfterRetirement => {
                let start = ctx.index_of_age(ctx.retirement_age);
                let wage = round_currency(ctx.average_working_income * costs.retirement_work_ratio);
                set_over(&mut flows.income, start, usize::MAX, wage);
            }
            LifeEvent::FamilyCare => {
                let start = ctx.index_of_age(costs.family_care_start_age);
                let end = start + costs.family_care_years;
                add_over(&mut flows.expense, start, end, costs.family_care_annual);
                // Spouse's parents as well
                if answers.marries() {
                    add_over(&mut flows.expense, start, end, costs.family_care_annual);
                }
            }
        }
    }
}

/// Apply every triggered life event in pipeline order
///
/// Returns the events that were applied.
pub fn apply_life_events<R: RandomSource + ?Sized>(
    ctx: &AdjustmentContext<'_>,
    flows: &mut YearlyFlows,
    rng: &mut R,
) -> Vec<LifeEvent> {
    let mut applied = Vec::new();

    for event in PIPELINE_ORDER {
        if event.applies(ctx.answers) {
            event.apply(ctx, flows, rng);
            applied.push(event);
        }
    }

    log::debug!("Applied life events: {applied:?}");
    applied
}

fn add_over(series: &mut [i64], start: usize, end: usize, amount: i64) {
    let end = end.min(series.len());
    if start < end {
        series[start..end].iter_mut().for_each(|v| *v += amount);
    }
}

fn set_over(series: &mut [i64], start: usize, end: usize, value: i64) {
    let end = end.min(series.len());
    if start < end {
        series[start..end].fill(value);
    }
}
