//! Living expense simulation

use crate::assumptions::Assumptions;
use crate::random::RandomSource;
use super::round_currency;

/// Simulate annual expenses for every age in `start_age..=end_age`
///
/// Each year draws one clipped-normal factor on the monthly baseline, then
/// with a small probability adds a one-off shock proportional to that year.
pub fn simulate_expenses<R: RandomSource + ?Sized>(
    assumptions: &Assumptions,
    start_age: u32,
    end_age: u32,
    rng: &mut R,
) -> Vec<i64> {
    let noise = &assumptions.expense_noise;
    let shock = &assumptions.expense_shock;
    let mut expenses = Vec::new();
    let mut shocks = 0;

    for age in start_age..=end_age {
        let monthly = assumptions.expense_brackets.monthly_at(age) as f64;
        let factor = rng.normal(noise.mean, noise.std_dev).clamp(noise.lower, noise.upper);
        let mut annual = monthly * factor * 12.0;

        if rng.unit() < shock.probability {
            annual += annual * rng.uniform(shock.min_fraction, shock.max_fraction);
            shocks += 1;
        }

        expenses.push(round_currency(annual));
    }

    log::debug!("Simulated {} expense years with {} shocks", expenses.len(), shocks);
    expenses
}
