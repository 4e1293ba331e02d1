//! Working income and pension simulation

use crate::assumptions::Assumptions;
use crate::random::RandomSource;
use super::round_currency;

/// Simulated income by year, starting at the current age
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeProjection {
    /// Working years `age..=retirement_age` followed by pension years
    /// `retirement_age..=last_age`; the retirement age appears in both
    pub incomes: Vec<i64>,

    /// Mean of the working-year incomes
    pub average_working_income: f64,

    /// Number of leading entries that are working income
    pub working_years: usize,
}

/// Simulate income from `current_age` to `last_age`
///
/// Working income follows the earnings curve scaled through the current
/// income, with a bounded random-walk trend and yearly noise. When
/// `current_age` is past `retirement_age` a single working year is produced.
pub fn simulate_income<R: RandomSource + ?Sized>(
    assumptions: &Assumptions,
    current_age: u32,
    current_income: i64,
    retirement_age: u32,
    last_age: u32,
    rng: &mut R,
) -> IncomeProjection {
    let curve = &assumptions.income_curve;
    let variation = &assumptions.income_variation;

    let scale = curve.scale_for(current_age, current_income);
    if scale.is_none() {
        log::warn!("Earnings curve is not positive at age {current_age}; using flat income");
    }

    let last_working_age = retirement_age.max(current_age);
    let mut incomes = Vec::new();
    let mut trend = 0.0_f64;

    for age in current_age..=last_working_age {
        let base = match scale {
            Some(k) => curve.value_at(age) * k,
            None => current_income as f64,
        };

        trend = (trend + rng.uniform(-variation.trend_step, variation.trend_step))
            .clamp(-variation.trend_limit, variation.trend_limit);
        let noise = rng.uniform(-variation.noise, variation.noise);

        incomes.push(round_currency(base * (1.0 + trend + noise)));
    }

    let working_years = incomes.len();
    let average_working_income = if working_years == 0 {
        0.0
    } else {
        incomes.iter().sum::<i64>() as f64 / working_years as f64
    };

    let pension = assumptions.pension.annual_pension(average_working_income) as f64;
    for _age in last_working_age..=last_age {
        let wobble = rng.uniform(-variation.pension_noise, variation.pension_noise);
        incomes.push(round_currency(pension * (1.0 + wobble)));
    }

    log::debug!(
        "Simulated {} income years ({} working), average working income {:.0}",
        incomes.len(),
        working_years,
        average_working_income
    );

    IncomeProjection {
        incomes,
        average_working_income,
        working_years,
    }
}
