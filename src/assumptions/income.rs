//! Earnings curve and public pension formula

/// Quadratic age-earnings curve, in units of 10,000
///
/// `curve(age) = intercept + linear * age + quadratic * age^2`
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeCurve {
    pub intercept: f64,
    pub linear: f64,
    pub quadratic: f64,
    /// Currency units per curve unit
    pub unit: f64,
}

impl Default for IncomeCurve {
    fn default() -> Self {
        Self {
            intercept: -150.0,
            linear: 20.0,
            quadratic: -0.2,
            unit: 10_000.0,
        }
    }
}

impl IncomeCurve {
    /// Curve value at `age`, in currency units
    pub fn value_at(&self, age: u32) -> f64 {
        let a = age as f64;
        (self.intercept + self.linear * a + self.quadratic * a * a) * self.unit
    }

    /// Factor that makes the curve pass through `income` at `age`
    ///
    /// None when the curve is not positive at that age.
    pub fn scale_for(&self, age: u32, income: i64) -> Option<f64> {
        let at_age = self.value_at(age);
        if at_age > 0.0 {
            Some(income as f64 / at_age)
        } else {
            None
        }
    }
}

/// Year-to-year wobble applied to working income
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeVariation {
    /// Half-width of the yearly trend step
    pub trend_step: f64,
    /// Trend is clamped to +/- this bound
    pub trend_limit: f64,
    /// Half-width of the independent yearly noise
    pub noise: f64,
    /// Half-width of the noise on pension payments
    pub pension_noise: f64,
}

impl Default for IncomeVariation {
    fn default() -> Self {
        Self {
            trend_step: 0.005,
            trend_limit: 0.01,
            noise: 0.03,
            pension_noise: 0.02,
        }
    }
}

/// Linear regression from average working income to monthly pension
///
/// `monthly = slope * average_income_in_10k + intercept`
#[derive(Debug, Clone, PartialEq)]
pub struct PensionFormula {
    pub slope: f64,
    pub intercept: f64,
}

impl Default for PensionFormula {
    fn default() -> Self {
        Self {
            slope: 165.0,
            intercept: 70_650.0,
        }
    }
}

impl PensionFormula {
    /// Annual pension for an average working income given in currency units
    pub fn annual_pension(&self, average_income: f64) -> i64 {
        let monthly = self.slope * (average_income / 10_000.0) + self.intercept;
        (monthly * 12.0).round_ties_even() as i64
    }
}
