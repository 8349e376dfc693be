use super::steps::Step;

pub const HEIGHT_MIN_CM: f64 = 140.0;
pub const HEIGHT_MAX_CM: f64 = 220.0;
pub const WEIGHT_MIN_KG: f64 = 40.0;
pub const WEIGHT_MAX_KG: f64 = 150.0;

/// Final tally handed to the results route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizTally {
    pub correct: usize,
    pub total: usize,
}

/// Transient state of one walk through the funnel: current position,
/// one answer slot per step, and the measurement inputs for the BMI
/// screens. Owned by the quiz view and discarded on navigation; the
/// tally leaves via the results route's query parameters only.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSession {
    steps: Vec<Step>,
    current: usize,
    answers: Vec<String>,
    height_cm: f64,
    weight_kg: f64,
    video_completed: bool,
}

impl QuizSession {
    pub fn new(steps: Vec<Step>) -> Self {
        let answers = vec![String::new(); steps.len()];
        Self {
            steps,
            current: 0,
            answers,
            height_cm: 170.0,
            weight_kg: 80.0,
            video_completed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.current]
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn answer(&self, step_index: usize) -> &str {
        &self.answers[step_index]
    }

    /// Records the selected option label for a step. Overwriting an
    /// earlier choice is allowed; the slot survives back/forward moves.
    pub fn select(&mut self, step_index: usize, value: String) {
        if step_index < self.answers.len() {
            self.answers[step_index] = value;
        }
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn set_height(&mut self, cm: f64) {
        self.height_cm = cm.clamp(HEIGHT_MIN_CM, HEIGHT_MAX_CM);
    }

    pub fn set_weight(&mut self, kg: f64) {
        self.weight_kg = kg.clamp(WEIGHT_MIN_KG, WEIGHT_MAX_KG);
    }

    pub fn video_completed(&self) -> bool {
        self.video_completed
    }

    pub fn mark_video_completed(&mut self) {
        self.video_completed = true;
    }

    /// Gating condition for leaving the current step: questions need a
    /// recorded answer, the video gate needs its completion signal,
    /// everything else advances freely.
    pub fn can_advance(&self) -> bool {
        match self.current_step() {
            Step::Question(_) => !self.answers[self.current].is_empty(),
            Step::VideoGate(_) => self.video_completed,
            Step::Info(_) | Step::BmiCalculator(_) | Step::BmiResult(_) | Step::Offer(_) => true,
        }
    }

    /// Moves forward one step when allowed. No-op at the last step or
    /// while the current step's gate is closed.
    pub fn advance(&mut self) {
        if self.current + 1 < self.steps.len() && self.can_advance() {
            self.current += 1;
        }
    }

    /// Moves back one step. No-op at the first step.
    pub fn retreat(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Tallies the scored questions. Which steps count is decided by
    /// `Step::scoring_answer` alone, so the totals stay right no matter
    /// how many non-scoring screen kinds the funnel picks up.
    pub fn finish(&self) -> QuizTally {
        let mut correct = 0;
        let mut total = 0;
        for (index, step) in self.steps.iter().enumerate() {
            if let Some(answer) = step.scoring_answer() {
                total += 1;
                if self.answers[index] == answer {
                    correct += 1;
                }
            }
        }
        QuizTally { correct, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::steps::{
        AnswerOption, BmiCalculatorStep, BmiResultStep, InfoStep, OfferStep, OptionLayout,
        QuestionStep, VideoGateStep,
    };

    fn question(correct: &str, intro: bool) -> Step {
        Step::Question(QuestionStep {
            question: "q".into(),
            description: None,
            options: vec![
                AnswerOption::Plain(correct.to_string()),
                AnswerOption::Plain("wrong".into()),
            ],
            correct_answer: Some(correct.to_string()),
            layout: OptionLayout::List,
            intro,
        })
    }

    fn info() -> Step {
        Step::Info(InfoStep {
            title: "t".into(),
            body: "b".into(),
            image_url: None,
            continue_label: "ok".into(),
        })
    }

    fn video_gate() -> Step {
        Step::VideoGate(VideoGateStep {
            title: "t".into(),
            video_url: "u".into(),
            locked_label: "l".into(),
        })
    }

    #[test]
    fn advance_requires_an_answer_on_questions() {
        let mut session = QuizSession::new(vec![question("a", false), info()]);
        session.advance();
        assert_eq!(session.current_index(), 0);
        session.select(0, "a".into());
        session.advance();
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn advance_is_a_noop_at_the_last_step() {
        let mut session = QuizSession::new(vec![info(), info()]);
        session.advance();
        session.advance();
        session.advance();
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn retreat_is_a_noop_at_the_first_step() {
        let mut session = QuizSession::new(vec![info(), info()]);
        session.retreat();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn answers_survive_back_and_forward_moves() {
        let mut session = QuizSession::new(vec![question("a", false), question("b", false)]);
        session.select(0, "a".into());
        session.advance();
        session.select(1, "b".into());
        session.retreat();
        assert_eq!(session.answer(0), "a");
        session.advance();
        assert_eq!(session.answer(1), "b");
    }

    #[test]
    fn overwriting_an_answer_is_allowed() {
        let mut session = QuizSession::new(vec![question("a", false)]);
        session.select(0, "wrong".into());
        session.select(0, "a".into());
        assert_eq!(session.answer(0), "a");
    }

    #[test]
    fn video_gate_blocks_until_completion_signal() {
        let mut session = QuizSession::new(vec![video_gate(), info()]);
        session.advance();
        assert_eq!(session.current_index(), 0);
        session.mark_video_completed();
        session.advance();
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn non_question_steps_advance_without_an_answer() {
        let mut session = QuizSession::new(vec![
            info(),
            Step::BmiCalculator(BmiCalculatorStep { title: "t".into(), description: "d".into() }),
            Step::BmiResult(BmiResultStep { title: "t".into() }),
            info(),
        ]);
        session.advance();
        session.advance();
        session.advance();
        assert_eq!(session.current_index(), 3);
    }

    #[test]
    fn tally_counts_only_scored_questions() {
        let mut session = QuizSession::new(vec![
            question("goal", true), // intro, excluded
            question("a", false),
            info(),
            question("b", false),
            Step::Offer(OfferStep {
                headline: "h".into(),
                body: "b".into(),
                checkout_url: "u".into(),
                cta_label: "c".into(),
            }),
        ]);
        session.select(0, "goal".into());
        session.select(1, "a".into());
        session.select(3, "wrong".into());
        let tally = session.finish();
        assert_eq!(tally, QuizTally { correct: 1, total: 2 });
    }

    #[test]
    fn tally_total_is_independent_of_non_scoring_step_order() {
        let front_loaded = QuizSession::new(vec![info(), video_gate(), question("a", false)]);
        let back_loaded = QuizSession::new(vec![question("a", false), info(), video_gate()]);
        assert_eq!(front_loaded.finish().total, 1);
        assert_eq!(back_loaded.finish().total, 1);
    }

    #[test]
    fn measurements_are_clamped_to_slider_bounds() {
        let mut session = QuizSession::new(vec![info()]);
        session.set_height(500.0);
        assert_eq!(session.height_cm(), HEIGHT_MAX_CM);
        session.set_height(10.0);
        assert_eq!(session.height_cm(), HEIGHT_MIN_CM);
        session.set_weight(1000.0);
        assert_eq!(session.weight_kg(), WEIGHT_MAX_KG);
        session.set_weight(1.0);
        assert_eq!(session.weight_kg(), WEIGHT_MIN_KG);
    }
}
