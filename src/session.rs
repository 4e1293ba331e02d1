//! Questionnaire session driving the engine one answer at a time
//!
//! Holds the answer store, the engine and a single random source, so a
//! session seeded once reproduces every preview and the final result.

use crate::answers::{AnswerStore, Answers, Question, QUESTIONS};
use crate::projection::{CalculationMode, ProjectionEngine, ProjectionResult};
use crate::random::{RandomSource, SimRng};

/// Result of submitting one answer
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// More questions remain; projection with the answers so far
    Preview(ProjectionResult),
    /// The last question was answered; the preview is drawn first, then the
    /// final result from the same source
    Completed {
        preview: ProjectionResult,
        result: ProjectionResult,
    },
}

impl SubmitOutcome {
    pub fn result(&self) -> &ProjectionResult {
        match self {
            SubmitOutcome::Preview(result) | SubmitOutcome::Completed { result, .. } => result,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed { .. })
    }
}

/// One pass through the questionnaire
#[derive(Debug, Clone)]
pub struct QuestionnaireSession<R> {
    store: AnswerStore,
    engine: ProjectionEngine,
    rng: R,
    current: usize,
}

impl QuestionnaireSession<SimRng<rand_chacha::ChaCha8Rng>> {
    /// Session with default assumptions and an unseeded generator
    pub fn with_entropy(engine: ProjectionEngine) -> Self {
        Self::new(engine, SimRng::from_entropy())
    }

    /// Session with a reproducible generator
    pub fn seeded(engine: ProjectionEngine, seed: u64) -> Self {
        Self::new(engine, SimRng::seeded(seed))
    }
}

impl<R: RandomSource> QuestionnaireSession<R> {
    pub fn new(engine: ProjectionEngine, rng: R) -> Self {
        Self {
            store: AnswerStore::new(),
            engine,
            rng,
            current: 0,
        }
    }

    /// Question awaiting an answer, None once complete
    pub fn current_question(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.current)
    }

    pub fn question_index(&self) -> usize {
        self.current
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 == QUESTIONS.len()
    }

    pub fn is_complete(&self) -> bool {
        self.current >= QUESTIONS.len()
    }

    pub fn answers(&self) -> &Answers {
        self.store.answers()
    }

    /// Projection for the answers given so far, defaults elsewhere
    pub fn preview(&mut self) -> ProjectionResult {
        self.calculate(CalculationMode::Preview)
    }

    /// Record `raw_answer` for the current question and recalculate
    ///
    /// Returns None when the questionnaire is already complete.
    pub fn submit(&mut self, raw_answer: &str) -> Option<SubmitOutcome> {
        if self.is_complete() {
            return None;
        }

        self.store.update(self.current, raw_answer);

        let preview = self.calculate(CalculationMode::Preview);
        let outcome = if self.is_last_question() {
            SubmitOutcome::Completed {
                preview,
                result: self.calculate(CalculationMode::Final),
            }
        } else {
            SubmitOutcome::Preview(preview)
        };
        self.current += 1;

        Some(outcome)
    }

    /// Back to the first question with default answers
    pub fn restart(&mut self) {
        self.store.reset();
        self.current = 0;
    }

    fn calculate(&mut self, mode: CalculationMode) -> ProjectionResult {
        let answers = self.store.snapshot();
        self.engine.calculate_results(&answers, mode, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::WorkingStyle;
    use crate::random::MeanSource;

    const ANSWERS: [&str; 12] = ["35", "500", "no", "0", "single_income", "0", "no", "20", "no", "no", "no", "no"];

    #[test]
    fn test_walks_every_question() {
        let mut session = QuestionnaireSession::new(ProjectionEngine::default(), MeanSource);

        for (idx, answer) in ANSWERS.iter().enumerate() {
            assert_eq!(session.question_index(), idx);
            assert!(session.current_question().is_some());
            let outcome = session.submit(answer).unwrap();
            assert_eq!(outcome.is_completed(), idx == ANSWERS.len() - 1);
        }

        assert!(session.is_complete());
        assert!(session.current_question().is_none());
        assert!(session.submit("extra").is_none());
        assert_eq!(session.answers().age, 35);
        assert_eq!(session.answers().working_style, WorkingStyle::SingleIncome);
    }

    #[test]
    fn test_preview_tracks_partial_answers() {
        let mut session = QuestionnaireSession::new(ProjectionEngine::default(), MeanSource);
        let initial = session.preview();
        assert_eq!(initial.asset_trajectory.len(), 62);

        let outcome = session.submit("50").unwrap();
        let result = outcome.result();
        assert_eq!(result.start_age, 50);
        assert_eq!(result.mode, CalculationMode::Preview);
        assert_eq!(result.asset_trajectory.len(), 42);
    }

    #[test]
    fn test_final_result_mode() {
        let mut session = QuestionnaireSession::seeded(ProjectionEngine::default(), 99);
        let mut last = None;
        for answer in ANSWERS {
            last = session.submit(answer);
        }

        match last {
            Some(SubmitOutcome::Completed { preview, result }) => {
                assert_eq!(preview.mode, CalculationMode::Preview);
                assert_eq!(result.mode, CalculationMode::Final);
            }
            other => panic!("expected completed outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_last_answer_previews_before_final() {
        let engine = ProjectionEngine::default();
        let mut session = QuestionnaireSession::seeded(engine.clone(), 5);
        let mut last = None;
        for answer in ANSWERS {
            last = session.submit(answer);
        }

        // Replay the same draws by hand: one preview per answer, then the final run
        let answers = session.answers().clone();
        let mut rng = SimRng::seeded(5);
        let mut partial = AnswerStore::new();
        let mut expected_preview = None;
        for (idx, answer) in ANSWERS.iter().enumerate() {
            partial.update(idx, answer);
            expected_preview =
                Some(engine.calculate_results(partial.answers(), CalculationMode::Preview, &mut rng));
        }
        let expected_final = engine.calculate_results(&answers, CalculationMode::Final, &mut rng);

        let Some(SubmitOutcome::Completed { preview, result }) = last else {
            panic!("expected completed outcome");
        };
        assert_eq!(Some(preview.asset_trajectory), expected_preview.map(|r| r.asset_trajectory));
        assert_eq!(result.asset_trajectory, expected_final.asset_trajectory);
    }

    #[test]
    fn test_bad_answer_still_advances() {
        let mut session = QuestionnaireSession::new(ProjectionEngine::default(), MeanSource);
        session.submit("not a number").unwrap();
        assert_eq!(session.question_index(), 1);
        assert_eq!(session.answers().age, 30);
    }

    #[test]
    fn test_restart() {
        let mut session = QuestionnaireSession::new(ProjectionEngine::default(), MeanSource);
        session.submit("44").unwrap();
        session.submit("800").unwrap();
        session.restart();

        assert_eq!(session.question_index(), 0);
        assert_eq!(session.answers(), &Answers::default());
    }
}
