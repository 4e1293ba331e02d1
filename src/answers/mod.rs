//! Questionnaire answers and the store that accumulates them

mod data;
pub mod questions;

pub use data::{AnswerStore, Answers, WorkingStyle};
pub use questions::{AnswerError, AnswerKind, Field, Question, QUESTIONS};
