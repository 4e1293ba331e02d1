//! Fixed costs and timings of life events

/// Annual amounts and timings used by the adjustment pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct LifeEventCosts {
    /// Annual mortgage repayment
    pub mortgage_annual: i64,
    /// Years from now until repayments start
    pub mortgage_start_offset: usize,
    /// Loan term in years
    pub mortgage_years: usize,

    /// Extra household cost per married year
    pub marriage_annual: i64,

    /// Partner income while both work, paid until retirement
    pub dual_income_boost: i64,

    /// Child-rearing cost per child per year
    pub child_annual: i64,
    pub child_years: usize,
    /// Years after marriage until the first birth
    pub first_child_delay: usize,
    /// Years between births
    pub child_spacing: usize,
    pub university_annual: i64,
    /// Child's age on entering university
    pub university_start: usize,
    pub university_years: usize,

    /// Mean and spread of the side income draw
    pub side_income_mean: f64,
    pub side_income_std_dev: f64,

    /// Income after retirement as a fraction of average working income
    pub retirement_work_ratio: f64,

    /// Annual caregiving cost per parent household
    pub family_care_annual: i64,
    /// Caregiver's age when care starts
    pub family_care_start_age: u32,
    pub family_care_years: usize,
}

impl Default for LifeEventCosts {
    fn default() -> Self {
        Self {
            mortgage_annual: 1_200_000,
            mortgage_start_offset: 15,
            mortgage_years: 30,
            marriage_annual: 1_000_000,
            dual_income_boost: 1_200_000,
            child_annual: 800_000,
            child_years: 20,
            first_child_delay: 2,
            child_spacing: 2,
            university_annual: 1_500_000,
            university_start: 18,
            university_years: 4,
            side_income_mean: 600_000.0,
            side_income_std_dev: 180_000.0,
            retirement_work_ratio: 0.4,
            family_care_annual: 1_500_000,
            family_care_start_age: 50,
            family_care_years: 10,
        }
    }
}
