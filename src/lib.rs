//! Life Plan - lifetime income, expense and asset projection
//!
//! This library provides:
//! - An ordered questionnaire and the answer store it fills
//! - Stochastic income (earnings curve plus pension) and expense simulation
//! - Deterministic life-event adjustments (housing, marriage, children, care)
//! - Asset trajectory, summary statistics and advice
//! - Persistence of the last completed result

pub mod error;
pub mod random;
pub mod answers;
pub mod assumptions;
pub mod projection;
pub mod session;
pub mod storage;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use random::{MeanSource, RandomSource, SimRng};
pub use answers::{AnswerStore, Answers, WorkingStyle, QUESTIONS};
pub use assumptions::Assumptions;
pub use projection::{CalculationMode, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use session::{QuestionnaireSession, SubmitOutcome};
pub use storage::{HomeSummary, LastSimulation, ResultStore};
