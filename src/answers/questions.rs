//! Ordered question catalog
//!
//! Question position is the contract with the front-end: index `i` of
//! [`QUESTIONS`] always updates the same [`Field`] with the same parser.

use thiserror::Error;

use super::data::{Answers, WorkingStyle};

/// Currency units per display unit (answers are given in units of 10,000)
pub const DISPLAY_UNIT: i64 = 10_000;

/// Why a raw answer was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("invalid number for {field}: {raw:?}")]
    InvalidNumber { field: &'static str, raw: String },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: u32 },

    #[error("expected yes or no for {field}: {raw:?}")]
    InvalidYesNo { field: &'static str, raw: String },

    #[error("unknown choice for {field}: {raw:?}")]
    InvalidChoice { field: &'static str, raw: String },
}

/// Answer fields, in questionnaire order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Age,
    AnnualIncome,
    BuyingHouse,
    MarriageAge,
    WorkingStyle,
    NumChildren,
    ChildrenUniversity,
    RetirementMonthlyExpense,
    JobChangeIntent,
    SideJob,
    WorkAfterRetirement,
    FamilyCare,
}

/// How the front-end should collect an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    Number,
    YesNo,
    Choice(&'static [&'static str]),
}

/// One entry of the question catalog
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub field: Field,
    pub prompt: &'static str,
    pub kind: AnswerKind,
}

pub const WORKING_STYLE_OPTIONS: &[&str] = &["dual_income", "single_income"];

pub const QUESTIONS: [Question; 12] = [
    Question {
        field: Field::Age,
        prompt: "How old are you?",
        kind: AnswerKind::Number,
    },
    Question {
        field: Field::AnnualIncome,
        prompt: "What is your annual income? (x10,000)",
        kind: AnswerKind::Number,
    },
    Question {
        field: Field::BuyingHouse,
        prompt: "Do you plan to buy a house?",
        kind: AnswerKind::YesNo,
    },
    Question {
        field: Field::MarriageAge,
        prompt: "At what age do you plan to marry? (0 if not)",
        kind: AnswerKind::Number,
    },
    Question {
        field: Field::WorkingStyle,
        prompt: "How will your household earn after marriage?",
        kind: AnswerKind::Choice(WORKING_STYLE_OPTIONS),
    },
    Question {
        field: Field::NumChildren,
        prompt: "How many children would you like?",
        kind: AnswerKind::Number,
    },
    Question {
        field: Field::ChildrenUniversity,
        prompt: "Will your children go to university?",
        kind: AnswerKind::YesNo,
    },
    Question {
        field: Field::RetirementMonthlyExpense,
        prompt: "How much will you need per month after retirement? (x10,000)",
        kind: AnswerKind::Number,
    },
    Question {
        field: Field::JobChangeIntent,
        prompt: "Do you plan to change jobs?",
        kind: AnswerKind::YesNo,
    },
    Question {
        field: Field::SideJob,
        prompt: "Do you have side income?",
        kind: AnswerKind::YesNo,
    },
    Question {
        field: Field::WorkAfterRetirement,
        prompt: "Will you keep working after retirement?",
        kind: AnswerKind::YesNo,
    },
    Question {
        field: Field::FamilyCare,
        prompt: "Might you need to care for a family member?",
        kind: AnswerKind::YesNo,
    },
];

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::AnnualIncome => "annual_income",
            Field::BuyingHouse => "buying_house",
            Field::MarriageAge => "marriage_age",
            Field::WorkingStyle => "working_style",
            Field::NumChildren => "num_children",
            Field::ChildrenUniversity => "children_university",
            Field::RetirementMonthlyExpense => "retirement_monthly_expense",
            Field::JobChangeIntent => "job_change_intent",
            Field::SideJob => "side_job",
            Field::WorkAfterRetirement => "work_after_retirement",
            Field::FamilyCare => "family_care",
        }
    }

    /// Parse `raw` and store it in `answers`; on error nothing is written
    pub fn apply(&self, answers: &mut Answers, raw: &str) -> Result<(), AnswerError> {
        match self {
            Field::Age => {
                let age = self.parse_number(raw)?;
                if age == 0 {
                    return Err(AnswerError::NotPositive {
                        field: self.name(),
                        value: age,
                    });
                }
                answers.age = age;
            }
            Field::AnnualIncome => {
                answers.annual_income = i64::from(self.parse_number(raw)?) * DISPLAY_UNIT;
            }
            Field::BuyingHouse => answers.buying_house = self.parse_yes_no(raw)?,
            Field::MarriageAge => answers.marriage_age = self.parse_number(raw)?,
            Field::WorkingStyle => answers.working_style = self.parse_working_style(raw)?,
            Field::NumChildren => answers.num_children = self.parse_number(raw)?,
            Field::ChildrenUniversity => answers.children_university = self.parse_yes_no(raw)?,
            Field::RetirementMonthlyExpense => {
                answers.retirement_monthly_expense =
                    i64::from(self.parse_number(raw)?) * DISPLAY_UNIT;
            }
            Field::JobChangeIntent => answers.job_change_intent = self.parse_yes_no(raw)?,
            Field::SideJob => answers.side_job = self.parse_yes_no(raw)?,
            Field::WorkAfterRetirement => answers.work_after_retirement = self.parse_yes_no(raw)?,
            Field::FamilyCare => answers.family_care = self.parse_yes_no(raw)?,
        }
        Ok(())
    }

    fn parse_number(&self, raw: &str) -> Result<u32, AnswerError> {
        raw.trim().parse().map_err(|_| AnswerError::InvalidNumber {
            field: self.name(),
            raw: raw.to_string(),
        })
    }

    fn parse_yes_no(&self, raw: &str) -> Result<bool, AnswerError> {
        match raw.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "はい" => Ok(true),
            "no" | "n" | "false" | "いいえ" => Ok(false),
            _ => Err(AnswerError::InvalidYesNo {
                field: self.name(),
                raw: raw.to_string(),
            }),
        }
    }

    fn parse_working_style(&self, raw: &str) -> Result<WorkingStyle, AnswerError> {
        match raw.trim().to_lowercase().as_str() {
            "dual_income" | "dual" | "共働き" => Ok(WorkingStyle::DualIncome),
            "single_income" | "single" | "片働き" => Ok(WorkingStyle::SingleIncome),
            _ => Err(AnswerError::InvalidChoice {
                field: self.name(),
                raw: raw.to_string(),
            }),
        }
    }
}
