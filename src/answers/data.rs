//! Answer snapshot and the mutable store behind the questionnaire

use serde::{Deserialize, Serialize};

use super::questions::QUESTIONS;

/// Household working arrangement after marriage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkingStyle {
    /// Both partners earn
    DualIncome,
    /// One earner
    SingleIncome,
}

impl WorkingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkingStyle::DualIncome => "dual_income",
            WorkingStyle::SingleIncome => "single_income",
        }
    }
}

/// Complete set of inputs to a projection
///
/// Currency amounts are whole units; the questionnaire collects income and
/// retirement expense in display units of 10,000.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    /// Current age
    pub age: u32,

    /// Current annual income
    pub annual_income: i64,

    /// Whether a house will be bought on a loan
    pub buying_house: bool,

    /// Age at marriage (0 = never marries)
    pub marriage_age: u32,

    pub working_style: WorkingStyle,

    pub num_children: u32,

    /// Whether the children go on to university
    pub children_university: bool,

    /// Expected monthly living cost after retirement
    pub retirement_monthly_expense: i64,

    /// Collected but not used by the engine
    pub job_change_intent: bool,

    pub side_job: bool,

    pub work_after_retirement: bool,

    /// Whether a parent will need caregiving
    pub family_care: bool,
}

impl Default for Answers {
    fn default() -> Self {
        Self {
            age: 30,
            annual_income: 4_000_000,
            buying_house: false,
            marriage_age: 0,
            working_style: WorkingStyle::DualIncome,
            num_children: 0,
            children_university: false,
            retirement_monthly_expense: 200_000,
            job_change_intent: false,
            side_job: false,
            work_after_retirement: false,
            family_care: false,
        }
    }
}

impl Answers {
    /// Whether the person is or will be married
    pub fn marries(&self) -> bool {
        self.marriage_age > 0
    }
}

/// Answers collected so far in a questionnaire session
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    answers: Answers,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        self.answers = Answers::default();
    }

    /// Apply the raw answer to the question at `question_index`
    ///
    /// Unknown indices are ignored. Answers that fail to parse leave the
    /// field unchanged and are only logged.
    pub fn update(&mut self, question_index: usize, raw_answer: &str) {
        let Some(question) = QUESTIONS.get(question_index) else {
            log::debug!("Ignoring answer for unknown question {question_index}");
            return;
        };

        if let Err(err) = question.field.apply(&mut self.answers, raw_answer) {
            log::warn!("Keeping previous value: {err}");
        }
    }

    /// Owned copy of the current answers
    pub fn snapshot(&self) -> Answers {
        self.answers.clone()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let answers = AnswerStore::new().snapshot();
        assert_eq!(answers.age, 30);
        assert_eq!(answers.annual_income, 4_000_000);
        assert_eq!(answers.working_style, WorkingStyle::DualIncome);
        assert_eq!(answers.retirement_monthly_expense, 200_000);
        assert!(!answers.marries());
    }

    #[test]
    fn test_update_in_order() {
        let mut store = AnswerStore::new();
        let raw = ["45", "650", "yes", "32", "single_income", "2", "はい", "25", "no", "y", "yes", "no"];
        for (idx, answer) in raw.iter().enumerate() {
            store.update(idx, answer);
        }

        let answers = store.snapshot();
        assert_eq!(answers.age, 45);
        assert_eq!(answers.annual_income, 6_500_000);
        assert!(answers.buying_house);
        assert_eq!(answers.marriage_age, 32);
        assert_eq!(answers.working_style, WorkingStyle::SingleIncome);
        assert_eq!(answers.num_children, 2);
        assert!(answers.children_university);
        assert_eq!(answers.retirement_monthly_expense, 250_000);
        assert!(!answers.job_change_intent);
        assert!(answers.side_job);
        assert!(answers.work_after_retirement);
        assert!(!answers.family_care);
    }

    #[test]
    fn test_invalid_number_keeps_prior_value() {
        let mut store = AnswerStore::new();
        store.update(0, "41");
        store.update(0, "abc");
        assert_eq!(store.answers().age, 41);

        store.update(0, "-3");
        store.update(0, "0");
        assert_eq!(store.answers().age, 41);
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let mut store = AnswerStore::new();
        store.update(1, "500");
        let before = store.snapshot();

        store.update(QUESTIONS.len(), "42");
        store.update(usize::MAX, "yes");
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = AnswerStore::new();
        let mut snapshot = store.snapshot();
        snapshot.age = 70;
        assert_eq!(store.answers().age, 30);

        store.update(0, "50");
        assert_eq!(snapshot.age, 70);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = AnswerStore::new();
        store.update(2, "yes");
        store.update(5, "3");
        store.reset();
        assert_eq!(store.snapshot(), Answers::default());
    }
}
