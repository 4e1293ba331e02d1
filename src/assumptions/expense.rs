//! Living cost brackets and the random terms applied to them

/// Monthly living cost by age bracket
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseBrackets {
    /// `(max_age, monthly_expense)` sorted by `max_age`
    brackets: Vec<(u32, i64)>,
    /// Monthly expense past the last bracket
    above: i64,
}

impl ExpenseBrackets {
    /// Single-person household costs: up to 34, 35-59, 60 and over
    pub fn single_household() -> Self {
        Self {
            brackets: vec![(34, 158_000), (59, 186_000)],
            above: 150_000,
        }
    }

    /// Build from `(max_age, monthly_expense)` rows
    ///
    /// The row with the highest `max_age` also covers every older age.
    pub fn from_rows(rows: &[(u32, i64)]) -> Option<Self> {
        let mut brackets = rows.to_vec();
        brackets.sort_by_key(|&(max_age, _)| max_age);
        let (_, above) = *brackets.last()?;
        brackets.pop();
        Some(Self { brackets, above })
    }

    /// Baseline monthly expense at `age`
    pub fn monthly_at(&self, age: u32) -> i64 {
        self.brackets
            .iter()
            .find(|&&(max_age, _)| age <= max_age)
            .map(|&(_, monthly)| monthly)
            .unwrap_or(self.above)
    }
}

impl Default for ExpenseBrackets {
    fn default() -> Self {
        Self::single_household()
    }
}

/// Clipped normal multiplier on the monthly baseline
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseNoise {
    pub mean: f64,
    pub std_dev: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Default for ExpenseNoise {
    fn default() -> Self {
        Self {
            mean: 1.0,
            std_dev: 0.05,
            lower: 0.8,
            upper: 1.2,
        }
    }
}

/// Occasional unplanned large expense
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseShock {
    /// Chance per year
    pub probability: f64,
    /// Extra cost as a fraction of the year's expense, drawn in `[min, max)`
    pub min_fraction: f64,
    pub max_fraction: f64,
}

impl Default for ExpenseShock {
    fn default() -> Self {
        Self {
            probability: 0.05,
            min_fraction: 0.1,
            max_fraction: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        let brackets = ExpenseBrackets::single_household();
        assert_eq!(brackets.monthly_at(22), 158_000);
        assert_eq!(brackets.monthly_at(34), 158_000);
        assert_eq!(brackets.monthly_at(35), 186_000);
        assert_eq!(brackets.monthly_at(59), 186_000);
        assert_eq!(brackets.monthly_at(60), 150_000);
        assert_eq!(brackets.monthly_at(90), 150_000);
    }

    #[test]
    fn test_from_rows_sorts_and_extends_last() {
        let brackets = ExpenseBrackets::from_rows(&[(120, 150_000), (34, 158_000), (59, 186_000)]).unwrap();
        assert_eq!(brackets, ExpenseBrackets::single_household());
        assert_eq!(brackets.monthly_at(130), 150_000);
        assert!(ExpenseBrackets::from_rows(&[]).is_none());
    }
}
